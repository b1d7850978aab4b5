//! CLI module for the Storage Cost Gateway
//!
//! Subcommands:
//! - `serve`: run the HTTP API server
//! - `compare`: one-shot storage-only comparison across all options
//! - `incremental`: evaluate one scenario file
//! - `batch`: evaluate a batch file row by row

pub mod batch;
pub mod compare;
pub mod incremental;
pub mod serve;

use clap::{Parser, Subcommand};

/// Storage Cost Gateway - tiered cloud storage cost calculator
#[derive(Parser)]
#[command(name = "storage-cost-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Compare storage-only costs across every supported option
    Compare(compare::CompareArgs),

    /// Evaluate one scenario file (storage + incremental costs)
    Incremental(incremental::IncrementalArgs),

    /// Evaluate a batch file of scenario rows
    Batch(batch::BatchArgs),
}
