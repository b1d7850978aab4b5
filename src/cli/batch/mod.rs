//! Batch command - evaluate a file of scenario rows

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::domain::CostEngine;
use crate::infrastructure::batch::{BatchRow, BatchService};

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input file (JSON array of scenario rows)
    #[arg(long)]
    pub input: PathBuf,

    /// Output file for the report; stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading batch file {}", args.input.display()))?;
    let rows: Vec<BatchRow> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing batch file {}", args.input.display()))?;

    let service = BatchService::new(CostEngine::standard());
    let report = service.evaluate(&rows);
    info!(
        rows = report.rows.len(),
        succeeded = report.succeeded,
        failed = report.failed,
        "batch complete"
    );

    let rendered = serde_json::to_string_pretty(&report)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("writing report to {}", path.display()))?,
        None => println!("{}", rendered),
    }

    if report.failed > 0 {
        anyhow::bail!("{} of {} rows failed", report.failed, report.rows.len());
    }
    Ok(())
}
