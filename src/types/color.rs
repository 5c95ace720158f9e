//! Display colors attached to parties, dots and labels.

use std::{fmt, str::FromStr};

use anyhow::{anyhow, ensure, Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Used for labels marking an exact tie.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Neutral grey for districts with no declared result.
    pub const PENDING: Rgb = Rgb { r: 150, g: 150, b: 150 };

    #[inline] pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Blend toward white by `amount` in [0.0, 1.0].
    pub fn lighten(self, amount: f64) -> Self {
        let t = if amount.is_finite() { amount.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |c: u8| (c as f64 + (255.0 - c as f64) * t).round() as u8;
        Self { r: mix(self.r), g: mix(self.g), b: mix(self.b) }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Parse `#rrggbb` (the leading `#` is optional).
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        ensure!(digits.len() == 6, "[Rgb::from_str] expected 6 hex digits, got '{s}'");
        let bytes = hex::decode(digits)
            .with_context(|| format!("[Rgb::from_str] invalid hex color '{s}'"))?;
        match bytes.as_slice() {
            &[r, g, b] => Ok(Self { r, g, b }),
            _ => Err(anyhow!("[Rgb::from_str] invalid hex color '{s}'")),
        }
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
