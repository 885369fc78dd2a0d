//! ZCA CLI - render, export and inspect zonal climate anomaly overlays.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "zca-cli",
    version,
    about = "Zonal climate anomaly overlay toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: zca_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("[ZCA] cli: Starting");
    zca_cmd::run(cli.command)
}
