use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Swing projection CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "openswing", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the swing at which each district flips between two parties
    Thresholds(ThresholdsArgs),

    /// Project the two-party swingometer screen
    Swingometer(SwingometerArgs),

    /// Project the three-party battleground screen
    Battleground(BattlegroundArgs),
}

/// Inputs shared by every command.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Party definitions (JSON array of {id, name, color})
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub parties: PathBuf,

    /// Historical votes (CSV: district,<party id>,...)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub votes: PathBuf,

    /// Output JSON file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Live state shared by the projection screens.
#[derive(clap::Args, Debug)]
pub struct LiveArgs {
    /// Current results (CSV: district,winner,final)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub results: Option<PathBuf>,

    /// Districts to keep in focus (one key per line)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub filter: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ThresholdsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Party whose gains are measured
    #[arg(long)]
    pub focus: String,

    /// Party it gains from
    #[arg(long)]
    pub comp: String,
}

#[derive(clap::Args, Debug)]
pub struct SwingometerArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub live: LiveArgs,

    /// Party on the left of the dial
    #[arg(long)]
    pub left: String,

    /// Party on the right of the dial
    #[arg(long)]
    pub right: String,

    /// Current swing toward the right party (0.05 = five points)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub swing: f64,

    /// Label every n-th seat beyond the midpoint
    #[arg(long, default_value_t = 10)]
    pub increment: usize,

    /// Minimum spacing between axis labels
    #[arg(long, default_value_t = openswing::DEFAULT_LABEL_TOLERANCE)]
    pub tolerance: f64,
}

#[derive(clap::Args, Debug)]
pub struct BattlegroundArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub live: LiveArgs,

    #[arg(long)]
    pub left: String,

    #[arg(long)]
    pub right: String,

    #[arg(long)]
    pub bottom: String,

    /// Current swing for a party, e.g. --swing LAB=-0.03 (repeatable)
    #[arg(long = "swing", value_parser = parse_party_swing, allow_hyphen_values = true)]
    pub swings: Vec<(String, f64)>,

    /// Sample other-party swings over [-limit, +limit]
    #[arg(long, default_value_t = 0.25)]
    pub limit: f64,

    /// Step between samples
    #[arg(long, default_value_t = openswing::DEFAULT_BUCKET_SIZE)]
    pub bucket: f64,
}

/// Parse `PARTY=VALUE`.
pub fn parse_party_swing(s: &str) -> Result<(String, f64)> {
    let (party, value) = s.split_once('=')
        .ok_or_else(|| anyhow!("expected PARTY=VALUE, got '{s}'"))?;
    let value = value.trim().parse::<f64>()
        .map_err(|e| anyhow!("invalid swing '{value}': {e}"))?;
    Ok((party.trim().to_string(), value))
}
