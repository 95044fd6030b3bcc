//! logbook-cli - Command line explorer for the sport-climbing logbook dataset.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "logbook-cli",
    version,
    about = "Sport-climbing logbook explorer"
)]
struct Cli {
    #[command(subcommand)]
    command: logbook_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    logbook_cmd::run(cli.command)
}
