//! Sorbent explorer CLI - inspect the dashboard's derived views from the terminal.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sorb-cli",
    version,
    about = "Adsorption material explorer toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sorb_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sorb_cmd::run(cli.command)
}
