use anyhow::Result;
use openswing::{io::write_json, Swingometer, SwingometerOptions};
use tracing::info;

use super::{load_inputs, load_live};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::SwingometerArgs) -> Result<()> {
    let (parties, districts) = load_inputs(&args.input)?;
    let (results, filter) = load_live(&args.live, &parties)?;

    let meter = Swingometer::new(
        parties.get(&args.left)?.clone(),
        parties.get(&args.right)?.clone(),
        SwingometerOptions { label_increment: args.increment, label_tolerance: args.tolerance },
    )?;

    let output = meter.project(&districts, args.swing, &results, filter.as_ref())?;
    info!(
        left_to_win = output.left_to_win,
        right_to_win = output.right_to_win,
        dots = output.dots.len(),
        labels = output.labels.len(),
        "[swingometer] projected"
    );

    write_json(&output, args.input.output.as_deref())
}
