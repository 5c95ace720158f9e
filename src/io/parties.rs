//! Party definitions loaded from JSON.

use std::{fs::File, io::BufReader, path::Path};

use ahash::AHashMap;
use anyhow::{anyhow, ensure, Context, Result};
use serde::Deserialize;

use crate::types::{Party, Rgb};

/// One entry of a parties file:
/// `{ "id": "LAB", "name": "Labour", "color": "#dc241f" }`.
#[derive(Clone, Debug, Deserialize)]
pub struct PartyConfig {
    pub id: String,
    pub name: String,
    pub color: Rgb,
}

/// Parties known to a run, addressable by their file id.
#[derive(Clone, Debug, Default)]
pub struct PartyRegistry {
    parties: Vec<Party>,
    by_id: AHashMap<String, Party>,
}

impl PartyRegistry {
    pub fn from_configs(configs: impl IntoIterator<Item = PartyConfig>) -> Result<Self> {
        let mut registry = Self::default();
        for config in configs {
            let id = config.id.trim().to_string();
            ensure!(!id.is_empty(), "[io::parties] party id must not be empty");
            ensure!(!registry.by_id.contains_key(&id), "[io::parties] duplicate party id '{id}'");

            let party = Party::new(config.name, id.as_str(), config.color);
            registry.by_id.insert(id, party.clone());
            registry.parties.push(party);
        }
        Ok(registry)
    }

    /// Look up a party by id.
    pub fn get(&self, id: &str) -> Result<&Party> {
        self.by_id.get(id.trim())
            .ok_or_else(|| anyhow!("[io::parties] unknown party id '{}'", id.trim()))
    }

    /// Parties in file order.
    #[inline] pub fn parties(&self) -> &[Party] { &self.parties }

    #[inline] pub fn len(&self) -> usize { self.parties.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parties.is_empty() }
}

/// Parse a JSON array of party definitions.
pub fn parse_parties(json: &str) -> Result<PartyRegistry> {
    let configs: Vec<PartyConfig> = serde_json::from_str(json)
        .context("[io::parties] Failed to parse parties JSON")?;
    PartyRegistry::from_configs(configs)
}

/// Read party definitions from a JSON file.
pub fn read_parties(path: &Path) -> Result<PartyRegistry> {
    let file = File::open(path)
        .with_context(|| format!("[io::parties] Failed to open parties file: {}", path.display()))?;
    let configs: Vec<PartyConfig> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::parties] Failed to parse parties file: {}", path.display()))?;
    PartyRegistry::from_configs(configs)
}
