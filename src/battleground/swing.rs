//! Majority search for one party against two others.
//!
//! The battleground plane holds swing vectors over three tracked parties that
//! sum to zero. A swing `s` toward the focus party takes `s / 2` from each of
//! the other two, so its gap to a tracked rival closes at 1.5 per unit of
//! swing. A rival outside the tracked trio keeps its share, and the gap only
//! closes at 1.0 per unit.

use tracing::trace;

use super::shares::{ShareRow, ShareTable};
use crate::types::Party;

/// Rate at which a uniform swing toward the focus party closes its gap to a
/// tracked rival.
pub const SHARE_TRANSFER_RATE: f64 = 1.5;

/// Extra swing demanded when the party to beat is not one of the tracked
/// others. This is a crude correction, not a statistical model.
pub const UNTRACKED_RIVAL_PENALTY: f64 = 1.5;

/// Strongest opponent of the focus party in one district after moving
/// `other_swing` from the first other party to the second.
struct Rival {
    share: f64,
    tracked: bool,
}

fn strongest_rival(row: &ShareRow, party: &Party, others: [&Party; 2], other_swing: f64) -> Rival {
    let [first, second] = others;

    // The tracked others are always rivals, even where they did not stand.
    let mut best = Rival { share: row.share(first) - other_swing, tracked: true };
    let second_share = row.share(second) + other_swing;
    if second_share > best.share {
        best = Rival { share: second_share, tracked: true };
    }

    for (p, share) in row.iter() {
        if p == party || p == first || p == second { continue }
        if share > best.share {
            best = Rival { share, tracked: false };
        }
    }
    best
}

/// Swing for `party` needed to close (or to lose) a margin against `rival`.
fn swing_to_close(margin: f64, rival: &Rival) -> f64 {
    let swing = margin / SHARE_TRANSFER_RATE;
    if rival.tracked { swing } else { swing * UNTRACKED_RIVAL_PENALTY }
}

/// k-th smallest (0-indexed) value, or `None` if there are not enough values.
fn select_rank(values: &mut [f64], k: usize) -> Option<f64> {
    if k >= values.len() { return None }
    let (_, nth, _) = values.select_nth_unstable_by(k, f64::total_cmp);
    Some(*nth)
}

/// Swing toward `party` at which it just reaches a majority, given a swing of
/// `other_swing` from `others[0]` to `others[1]`.
///
/// Below a majority this is the `needed`-th smallest swing among districts it
/// does not yet win. At or above a majority it is the negated swing at which
/// it would drop below. Returns `None` when too few districts can supply the
/// swing; a district can only be gained where the party stood.
///
/// The result is the swing toward `party` itself, with each tracked other
/// losing half of it. A share gap of `g` to a tracked rival therefore needs
/// `g / SHARE_TRANSFER_RATE`, which is two thirds of the raw gap. Multiply by
/// [`SHARE_TRANSFER_RATE`] to get the raw share gap.
pub fn calculate_swing(party: &Party, others: [&Party; 2], shares: &ShareTable, other_swing: f64) -> Option<f64> {
    let mut to_gain = Vec::new();
    let mut to_lose = Vec::new();

    for row in shares.rows() {
        let share = row.share(party);
        let rival = strongest_rival(row, party, others, other_swing);
        if share > rival.share {
            to_lose.push(swing_to_close(share - rival.share, &rival));
        } else if share > 0.0 {
            to_gain.push(swing_to_close(rival.share - share, &rival));
        }
    }

    let stage1_wins = to_lose.len();
    let majority = shares.majority();

    let result = if stage1_wins < majority {
        select_rank(&mut to_gain, majority - stage1_wins - 1)
    } else {
        select_rank(&mut to_lose, stage1_wins - majority).map(|swing| -swing)
    };

    trace!(%party, other_swing, stage1_wins, majority, ?result, "calculated swing");
    result
}
