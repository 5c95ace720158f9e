use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use super::{color::Rgb, party::Party};

/// Historical vote counts for a single district.
#[derive(Clone, Debug)]
pub struct District<K> {
    pub key: K,
    pub votes: AHashMap<Party, u64>,
}

impl<K> District<K> {
    pub fn new(key: K, votes: impl IntoIterator<Item = (Party, u64)>) -> Self {
        let mut map = AHashMap::new();
        for (party, count) in votes {
            *map.entry(party).or_insert(0) += count;
        }
        Self { key, votes: map }
    }

    /// Total votes cast across all parties.
    #[inline] pub fn total(&self) -> u64 { self.votes.values().sum() }

    /// Votes for `party`, zero if it did not stand.
    #[inline]
    pub fn votes_for(&self, party: &Party) -> u64 {
        self.votes.get(party).copied().unwrap_or(0)
    }

    /// The party with a strict plurality of votes.
    /// Districts with no votes, or with an exact tie at the top, have no winner.
    pub fn winner(&self) -> Option<&Party> {
        let mut best: Option<(&Party, u64)> = None;
        let mut tied = false;
        for (party, &count) in &self.votes {
            match best {
                Some((_, top)) if count < top => {}
                Some((_, top)) if count == top => tied = true,
                _ => { best = Some((party, count)); tied = false; }
            }
        }
        match best {
            Some((party, top)) if top > 0 && !tied => Some(party),
            _ => None,
        }
    }

    /// Whether the historical winner is one of `parties`.
    pub fn won_by_any(&self, parties: &[&Party]) -> bool {
        self.winner().is_some_and(|w| parties.contains(&w))
    }

    /// Share of the total vote won by `party`, or `None` for an empty district.
    pub fn share(&self, party: &Party) -> Option<f64> {
        let total = self.total();
        (total > 0).then(|| self.votes_for(party) as f64 / total as f64)
    }
}

/// Live state of a district on the night.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CurrentResult {
    pub winner: Option<Party>,
    pub is_final: bool,
}

impl CurrentResult {
    pub fn declared(winner: Party) -> Self { Self { winner: Some(winner), is_final: true } }

    pub fn provisional(winner: Party) -> Self { Self { winner: Some(winner), is_final: false } }

    pub fn pending() -> Self { Self { winner: None, is_final: false } }

    /// Dot color: the winner's color, washed out while not final.
    pub fn color(&self) -> Rgb {
        match (&self.winner, self.is_final) {
            (Some(party), true) => party.color(),
            (Some(party), false) => party.color().lighten(0.5),
            (None, _) => Rgb::PENDING,
        }
    }
}

/// Live results keyed by district.
pub type CurrentResults<K> = AHashMap<K, CurrentResult>;

/// Subset of districts to highlight; everything else is dimmed.
pub type SeatFilter<K> = AHashSet<K>;

/// Color of a district's dot from its live result.
pub(crate) fn current_color<K: Eq + Hash>(results: &CurrentResults<K>, key: &K) -> Rgb {
    results.get(key).map_or(Rgb::PENDING, CurrentResult::color)
}

/// Whether a district is highlighted by the (optional) filter.
#[inline]
pub(crate) fn in_focus<K: Eq + Hash>(filter: Option<&SeatFilter<K>>, key: &K) -> bool {
    filter.is_none_or(|f| f.contains(key))
}
