//! Compare command - print a storage-only comparison table

use clap::Args;
use tracing::debug;

use crate::domain::{CostEngine, StorageComparisonResult, TierAllocation};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Hot tier capacity in GB
    #[arg(long, default_value_t = 0.0)]
    pub hot: f64,

    /// Cold tier capacity in GB
    #[arg(long, default_value_t = 0.0)]
    pub cold: f64,

    /// Archive tier capacity in GB
    #[arg(long, default_value_t = 0.0)]
    pub archive: f64,

    /// Number of identically-configured databases
    #[arg(long, default_value_t = 1)]
    pub databases: u32,

    /// Leave the AWS S3 option out of the comparison
    #[arg(long)]
    pub no_aws: bool,

    /// Show annual figures (monthly x 12, display scaling only)
    #[arg(long)]
    pub annual: bool,

    /// Emit the raw comparison as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: CompareArgs) -> anyhow::Result<()> {
    debug!(?args, "running comparison");

    let allocation = TierAllocation::new(args.hot, args.cold, args.archive);
    let engine = CostEngine::standard();
    let options = engine.all_storage_options(
        allocation.total(),
        &allocation,
        args.databases,
        !args.no_aws,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    print_table(&options, args.databases, args.annual);
    Ok(())
}

fn cheapest(options: &[StorageComparisonResult]) -> Option<usize> {
    options
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.total_for_all_databases
                .total_cmp(&b.total_for_all_databases)
        })
        .map(|(index, _)| index)
}

fn print_table(options: &[StorageComparisonResult], databases: u32, annual: bool) {
    // The engine always returns monthly figures; annual scaling is
    // applied here, at display time only.
    let display_scale = if annual { 12.0 } else { 1.0 };
    let period = if annual { "annual" } else { "monthly" };
    let winner = cheapest(options);

    println!(
        "{:<34} {:>12} {:>12} {:>12} {:>10} {:>14} {:>16}",
        "Option", "Hot", "Cold", "Archive", "Index", "Per database", "All databases"
    );
    for (index, option) in options.iter().enumerate() {
        let b = &option.breakdown;
        let marker = if winner == Some(index) { "*" } else { " " };
        println!(
            "{}{:<33} {:>12.2} {:>12.2} {:>12.2} {:>10.2} {:>14.2} {:>16.2}",
            marker,
            option.label,
            b.hot * display_scale,
            b.cold * display_scale,
            b.archive * display_scale,
            b.index.unwrap_or(0.0) * display_scale,
            b.total * display_scale,
            option.total_for_all_databases * display_scale,
        );
    }
    println!();
    println!(
        "{} USD, {} database(s); * marks the cheapest fleet total",
        period, databases
    );
}
