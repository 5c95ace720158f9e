use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::{atomic::{AtomicU64, Ordering}, Arc},
};

use serde::{Serialize, Serializer};

use super::color::Rgb;

static NEXT_PARTY_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct PartyInfo {
    id: u64,
    name: Arc<str>,
    abbreviation: Arc<str>,
    color: Rgb,
}

/// A contesting party.
///
/// Identity is opaque: two parties compare equal only if one is a clone of
/// the other, never because their names match. Cloning is cheap.
#[derive(Clone)]
pub struct Party(Arc<PartyInfo>);

impl Party {
    /// Create a new party with a fresh identity.
    pub fn new(name: impl Into<Arc<str>>, abbreviation: impl Into<Arc<str>>, color: Rgb) -> Self {
        Self(Arc::new(PartyInfo {
            id: NEXT_PARTY_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            abbreviation: abbreviation.into(),
            color,
        }))
    }

    #[inline] pub fn name(&self) -> &str { &self.0.name }

    #[inline] pub fn abbreviation(&self) -> &str { &self.0.abbreviation }

    #[inline] pub fn color(&self) -> Rgb { self.0.color }
}

impl PartialEq for Party {
    fn eq(&self, other: &Self) -> bool { self.0.id == other.0.id }
}

impl Eq for Party {}

impl Hash for Party {
    fn hash<H: Hasher>(&self, state: &mut H) { self.0.id.hash(state) }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.abbreviation)
    }
}

impl fmt::Debug for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Party({}#{})", self.0.abbreviation, self.0.id)
    }
}

/// Parties serialize as their abbreviation.
impl Serialize for Party {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_not_name_equality() {
        let a = Party::new("Alpha", "A", Rgb::BLACK);
        let b = Party::new("Alpha", "A", Rgb::BLACK);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn accessors_return_construction_values() {
        let p = Party::new("Green", "GRN", Rgb::new(106, 176, 35));
        assert_eq!(p.name(), "Green");
        assert_eq!(p.abbreviation(), "GRN");
        assert_eq!(p.color(), Rgb::new(106, 176, 35));
        assert_eq!(p.to_string(), "GRN");
    }
}
