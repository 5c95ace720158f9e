use ahash::AHashMap;
use anyhow::Result;
use openswing::{io::write_json, Battleground, BattlegroundOptions};
use tracing::info;

use super::{load_inputs, load_live};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::BattlegroundArgs) -> Result<()> {
    let (parties, districts) = load_inputs(&args.input)?;
    let (results, filter) = load_live(&args.live, &parties)?;

    let mut swing_state = AHashMap::new();
    for (id, value) in &args.swings {
        swing_state.insert(parties.get(id)?.clone(), *value);
    }

    let ground = Battleground::new(
        parties.get(&args.left)?.clone(),
        parties.get(&args.right)?.clone(),
        parties.get(&args.bottom)?.clone(),
        BattlegroundOptions { range_limit: args.limit, bucket_size: args.bucket },
    )?;

    let output = ground.project(&districts, &swing_state, &results, filter.as_ref())?;
    info!(
        lines = output.lines.len(),
        points = output.lines.iter().map(|line| line.points.len()).sum::<usize>(),
        dots = output.dots.len(),
        seats = ?output.projected_seats,
        "[battleground] projected"
    );

    write_json(&output, args.input.output.as_deref())
}
