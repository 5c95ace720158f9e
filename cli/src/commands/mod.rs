pub mod battleground;
pub mod swingometer;
pub mod thresholds;

use anyhow::Result;
use openswing::{
    io::{read_parties, read_results, read_seat_filter, read_votes, PartyRegistry},
    CurrentResults, District, SeatFilter,
};
use tracing::info;

use crate::cli::{InputArgs, LiveArgs};

/// Parties and historical votes named on the command line.
pub(crate) fn load_inputs(input: &InputArgs) -> Result<(PartyRegistry, Vec<District<String>>)> {
    info!(parties = %input.parties.display(), votes = %input.votes.display(), "loading inputs");
    let parties = read_parties(&input.parties)?;
    let districts = read_votes(&input.votes, &parties)?;
    Ok((parties, districts))
}

/// Live results and focus filter, both optional.
pub(crate) fn load_live(live: &LiveArgs, parties: &PartyRegistry)
    -> Result<(CurrentResults<String>, Option<SeatFilter<String>>)>
{
    let results = match &live.results {
        Some(path) => read_results(path, parties)?,
        None => CurrentResults::new(),
    };
    let filter = live.filter.as_deref().map(read_seat_filter).transpose()?;
    Ok((results, filter))
}
