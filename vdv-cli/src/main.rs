//! vdv-cli - Command line tool for fetching the public chart datasets.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "vdv-cli",
    version,
    about = "Vietnam data-visualization dataset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: vdv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    vdv_cmd::run(cli.command).await
}
