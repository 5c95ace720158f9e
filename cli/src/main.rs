mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{battleground, swingometer, thresholds};

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Thresholds(args) => thresholds::run(&cli, args),
        Commands::Swingometer(args) => swingometer::run(&cli, args),
        Commands::Battleground(args) => battleground::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
