//! Storage Cost Gateway
//!
//! Monthly cost calculator for multi-tier cloud object storage,
//! covering a tiered Azure-style model (Data Lake / Blob, LRS / GRS)
//! and an AWS S3-like model, with:
//! - volume-tiered storage slabs
//! - per-operation transaction pricing
//! - retrieval, query-acceleration and index surcharges
//! - prorated early-deletion penalties
//! - fleet-level aggregation across databases

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{CostEngine, PricingCatalog};

use api::AppState;

/// Create the application state shared by the HTTP handlers
pub fn create_app_state() -> AppState {
    AppState::new(CostEngine::standard())
}
