//! AQD CLI - Command line tool for the air quality dashboard core.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aqd-cli",
    version,
    about = "Air quality dashboard: filter per-city measurements, view metrics and rankings"
)]
struct Cli {
    #[command(subcommand)]
    command: aqd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("aqd-cli {}", env!("CARGO_PKG_VERSION"));
    aqd_cmd::run(cli.command).await
}
