use serde::Serialize;

use super::color::Rgb;

/// A district projected onto the one-dimensional swingometer axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dot {
    pub position: f64,
    pub color: Rgb,
    pub in_focus: bool,
}

/// A district (or line vertex) projected onto the three-party swing plane.
/// Axes are ordered (left, right, bottom) and sum to zero.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Dot3 {
    pub position: [f64; 3],
    pub color: Rgb,
    pub in_focus: bool,
}

impl Dot3 {
    /// Sum of the three axes; zero up to rounding.
    #[inline] pub fn axis_sum(&self) -> f64 { self.position.iter().sum() }
}
