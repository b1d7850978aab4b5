//! Incremental command - evaluate one scenario file

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::domain::CostEngine;
use crate::infrastructure::batch::{BatchRow, BatchService, RowOutcome};

#[derive(Args, Debug)]
pub struct IncrementalArgs {
    /// Scenario file (one JSON object in the batch-row shape)
    #[arg(long)]
    pub file: PathBuf,
}

pub async fn run(args: IncrementalArgs) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("reading scenario file {}", args.file.display()))?;
    let row: BatchRow = serde_json::from_str(&contents)
        .with_context(|| format!("parsing scenario file {}", args.file.display()))?;

    let service = BatchService::new(CostEngine::standard());
    let report = service.evaluate(std::slice::from_ref(&row));

    match &report.rows[0] {
        RowOutcome::Ok { costs, .. } => {
            println!("{}", serde_json::to_string_pretty(costs)?);
            Ok(())
        }
        RowOutcome::Error { error, .. } => anyhow::bail!("scenario failed: {}", error),
    }
}
