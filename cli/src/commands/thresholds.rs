use anyhow::Result;
use openswing::{io::write_json, Party, ThresholdList};
use serde::Serialize;
use tracing::info;

use super::load_inputs;

#[derive(Serialize)]
struct ThresholdReport {
    focus: Party,
    comp: Party,
    total_districts: usize,
    swing_for_majority: Option<f64>,
    thresholds: ThresholdList,
}

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::ThresholdsArgs) -> Result<()> {
    let (parties, districts) = load_inputs(&args.input)?;
    let focus = parties.get(&args.focus)?.clone();
    let comp = parties.get(&args.comp)?.clone();

    let thresholds = ThresholdList::build(&districts, &focus, &comp)?;
    let majority = thresholds.swing_for_majority(districts.len());
    info!(%focus, %comp, contested = thresholds.len(), majority, "[thresholds] built");

    let report = ThresholdReport {
        focus,
        comp,
        total_districts: districts.len(),
        swing_for_majority: majority.is_finite().then_some(majority),
        thresholds,
    };
    write_json(&report, args.input.output.as_deref())
}
