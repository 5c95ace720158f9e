use std::hash::Hash;

use ahash::AHashMap;
use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::debug;

use super::{
    line::{calculate_line, Line, DEFAULT_BUCKET_SIZE},
    shares::ShareTable,
};
use crate::types::{current_color, in_focus, CurrentResults, District, Dot3, Party, SeatFilter};

/// Display and discretization tuning for the battleground.
#[derive(Clone, Debug, PartialEq)]
pub struct BattlegroundOptions {
    /// Other-party swings are sampled over `[-range_limit, +range_limit]`.
    pub range_limit: f64,
    /// Step between samples.
    pub bucket_size: f64,
}

impl Default for BattlegroundOptions {
    fn default() -> Self {
        Self { range_limit: 0.25, bucket_size: DEFAULT_BUCKET_SIZE }
    }
}

/// Everything the battleground screen draws, for one input snapshot.
/// Three-axis positions are ordered (left, right, bottom).
#[derive(Clone, Debug, Serialize)]
pub struct BattlegroundOutput {
    pub parties: [Party; 3],
    /// Swing state applied to each tracked party.
    pub current_swing: [f64; 3],
    /// Seats each tracked party wins under `current_swing`.
    pub projected_seats: [usize; 3],
    pub lines: Vec<Line>,
    pub dots: Vec<Dot3>,
}

/// Three-party swing projection.
#[derive(Clone, Debug)]
pub struct Battleground {
    parties: [Party; 3],
    options: BattlegroundOptions,
}

impl Battleground {
    pub fn new(left: Party, right: Party, bottom: Party, options: BattlegroundOptions) -> Result<Self> {
        ensure!(left != right && left != bottom && right != bottom,
            "[Battleground::new] parties must be distinct ({left}, {right}, {bottom})");
        ensure!(options.range_limit.is_finite() && options.range_limit >= 0.0,
            "[Battleground::new] range_limit must be finite and non-negative, got {}", options.range_limit);
        ensure!(options.bucket_size.is_finite() && options.bucket_size > 0.0,
            "[Battleground::new] bucket_size must be positive, got {}", options.bucket_size);
        Ok(Self { parties: [left, right, bottom], options })
    }

    #[inline] pub fn parties(&self) -> &[Party; 3] { &self.parties }

    #[inline] pub fn options(&self) -> &BattlegroundOptions { &self.options }

    /// Recompute the full screen state from scratch.
    ///
    /// `swing_state` maps tracked parties to the swing currently applied to
    /// them; missing parties get zero.
    pub fn project<K: Eq + Hash>(
        &self,
        districts: &[District<K>],
        swing_state: &AHashMap<Party, f64>,
        results: &CurrentResults<K>,
        filter: Option<&SeatFilter<K>>,
    ) -> Result<BattlegroundOutput> {
        let current_swing = self.parties.each_ref()
            .map(|party| swing_state.get(party).copied().unwrap_or(0.0));
        ensure!(current_swing.iter().all(|s| s.is_finite()),
            "[Battleground::project] swing state must be finite, got {current_swing:?}");

        let shares = ShareTable::from_districts(districts);
        let parties = self.parties.each_ref();

        let lines = (0..3)
            .map(|focus| calculate_line(focus, parties, &shares, self.options.range_limit, self.options.bucket_size))
            .collect::<Result<Vec<_>>>()?;

        let dots = districts.iter()
            .filter(|district| district.won_by_any(&parties))
            .filter_map(|district| {
                let row = parties.map(|party| district.share(party));
                let [Some(l), Some(r), Some(b)] = row else { return None };
                Some(Dot3 {
                    position: tie_point([l, r, b]),
                    color: current_color(results, &district.key),
                    in_focus: in_focus(filter, &district.key),
                })
            })
            .collect::<Vec<_>>();

        let projected_seats = project_seats(&shares, parties, current_swing);

        debug!(
            parties = ?parties,
            districts = districts.len(),
            dots = dots.len(),
            ?projected_seats,
            "projected battleground"
        );

        Ok(BattlegroundOutput {
            parties: self.parties.clone(),
            current_swing,
            projected_seats,
            lines,
            dots,
        })
    }
}

/// Swing vector (summing to zero) that would leave all three shares equal.
pub fn tie_point(shares: [f64; 3]) -> [f64; 3] {
    let mean = shares.iter().sum::<f64>() / 3.0;
    shares.map(|share| mean - share)
}

/// Seats won by each tracked party after adding `swing` to its share.
/// Untracked parties keep their share; exact ties award no seat.
fn project_seats(shares: &ShareTable, parties: [&Party; 3], swing: [f64; 3]) -> [usize; 3] {
    let mut seats = [0; 3];
    for row in shares.rows() {
        let tracked = parties.map(|party| row.share(party)).iter().zip(swing)
            .map(|(share, delta)| share + delta)
            .collect::<Vec<_>>();
        let untracked = row.iter()
            .filter(|(p, _)| !parties.contains(p))
            .map(|(_, share)| share)
            .fold(f64::NEG_INFINITY, f64::max);

        let (best, top) = tracked.iter().copied().enumerate()
            .fold((0, f64::NEG_INFINITY), |acc, (i, s)| if s > acc.1 { (i, s) } else { acc });
        let tied = tracked.iter().enumerate().any(|(i, &s)| i != best && s == top);
        if top > untracked && !tied {
            seats[best] += 1;
        }
    }
    seats
}
