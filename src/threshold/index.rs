use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::debug;

use crate::types::{District, Party};

/// Uniform swing toward `focus` (from `comp`) at which a single district flips.
///
/// Returns `None` when the district has no votes or its winner is neither
/// party. Negative values mean `focus` already holds the district.
pub fn flip_point<K>(district: &District<K>, focus: &Party, comp: &Party) -> Option<f64> {
    let total = district.total();
    if total == 0 { return None }
    let winner = district.winner()?;
    if winner != focus && winner != comp { return None }

    let focus_votes = district.votes_for(focus) as f64;
    let comp_votes = district.votes_for(comp) as f64;
    Some(0.5 * (comp_votes - focus_votes) / total as f64)
}

/// Ascending flip points for every district contested by two parties.
///
/// The value at rank `k` (0-indexed) is the swing toward `focus` at which it
/// takes its `(k + 1)`-th seat among the contested districts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdList {
    values: Vec<f64>,
}

impl ThresholdList {
    /// Build the list for `focus` against `comp`.
    pub fn build<'a, K: 'a>(
        districts: impl IntoIterator<Item = &'a District<K>>,
        focus: &Party,
        comp: &Party,
    ) -> Result<Self> {
        ensure!(focus != comp, "[ThresholdList::build] focus and comparison party must differ ({focus})");

        let values = districts.into_iter()
            .filter_map(|district| flip_point(district, focus, comp))
            .collect::<Vec<_>>();

        debug!(%focus, %comp, contested = values.len(), "built threshold list");
        Ok(Self::from_unsorted(values))
    }

    /// Wrap arbitrary flip points, sorting them.
    pub fn from_unsorted(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    /// Number of contested districts.
    #[inline] pub fn len(&self) -> usize { self.values.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Sorted flip points.
    #[inline] pub fn values(&self) -> &[f64] { &self.values }

    /// Flip point at 0-indexed rank `k`.
    #[inline] pub fn at_rank(&self, k: usize) -> Option<f64> { self.values.get(k).copied() }

    /// Swing at which `focus` takes its `seat`-th contested seat (1-indexed).
    #[inline]
    pub fn seat_at(&self, seat: usize) -> Option<f64> {
        seat.checked_sub(1).and_then(|k| self.at_rank(k))
    }

    /// Swing toward `focus` needed for a majority of `total_districts`,
    /// or `+infinity` if there are not enough contested districts.
    pub fn swing_for_majority(&self, total_districts: usize) -> f64 {
        self.at_rank(total_districts / 2).unwrap_or(f64::INFINITY)
    }

    /// Contested seats held by `focus` once the swing toward it is `swing`.
    pub fn seats_below(&self, swing: f64) -> usize {
        self.values.partition_point(|&t| t < swing)
    }
}
