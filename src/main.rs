use clap::Parser;
use storage_cost_gateway::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Compare(args) => cli::compare::run(args).await,
        Command::Incremental(args) => cli::incremental::run(args).await,
        Command::Batch(args) => cli::batch::run(args).await,
    }
}
