use smallvec::SmallVec;

use crate::types::{District, Party};

/// Vote shares of every party standing in one district.
#[derive(Clone, Debug, Default)]
pub struct ShareRow {
    shares: SmallVec<[(Party, f64); 6]>,
}

impl ShareRow {
    /// Share of `party`, zero if it did not stand.
    #[inline]
    pub fn share(&self, party: &Party) -> f64 {
        self.shares.iter().find(|(p, _)| p == party).map_or(0.0, |&(_, s)| s)
    }

    /// Iterate over `(party, share)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Party, f64)> + '_ {
        self.shares.iter().map(|(p, s)| (p, *s))
    }
}

/// Historical vote shares for every district with at least one vote.
#[derive(Clone, Debug, Default)]
pub struct ShareTable {
    rows: Vec<ShareRow>,
    total_districts: usize,
}

impl ShareTable {
    /// Convert vote counts to shares. Districts with no votes get no row but
    /// still count toward the majority.
    pub fn from_districts<K>(districts: &[District<K>]) -> Self {
        let rows = districts.iter()
            .filter_map(|district| {
                let total = district.total();
                (total > 0).then(|| ShareRow {
                    shares: district.votes.iter()
                        .map(|(party, &votes)| (party.clone(), votes as f64 / total as f64))
                        .collect(),
                })
            })
            .collect();

        Self { rows, total_districts: districts.len() }
    }

    #[inline] pub fn rows(&self) -> &[ShareRow] { &self.rows }

    /// Number of districts, including those with no votes.
    #[inline] pub fn total_districts(&self) -> usize { self.total_districts }

    /// Seats needed for a majority.
    #[inline] pub fn majority(&self) -> usize { self.total_districts / 2 + 1 }
}
