use serde::Serialize;
use tracing::trace;

use crate::types::Rgb;

/// Tolerance used for swingometer axis labels.
pub const DEFAULT_LABEL_TOLERANCE: f64 = 0.005;

/// A numeric annotation on the swing axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub position: f64,
    pub color: Rgb,
    pub text: String,
}

impl Label {
    pub fn new(position: f64, color: Rgb, text: impl Into<String>) -> Self {
        Self { position, color, text: text.into() }
    }
}

/// Greedy de-duplication of labels along an axis.
///
/// Labels are visited in input order. A label is kept only if its position is
/// not inside `[p - tolerance, p + tolerance]` for any previously kept `p`.
/// Earlier labels win, and the output preserves input order.
pub fn filter_nearby(labels: impl IntoIterator<Item = Label>, tolerance: f64) -> Vec<Label> {
    // Sorted positions of kept labels, so each check only looks at two neighbours.
    let mut covered: Vec<f64> = Vec::new();
    let mut kept = Vec::new();

    for label in labels {
        let pos = label.position;
        if pos.is_nan() { continue }

        let i = covered.partition_point(|&p| p < pos);
        let clash = |j: usize| covered.get(j).is_some_and(|&p| (p - pos).abs() <= tolerance);
        if clash(i) || (i > 0 && clash(i - 1)) {
            trace!(position = pos, text = %label.text, "dropping overlapping label");
            continue;
        }

        covered.insert(i, pos);
        kept.push(label);
    }

    kept
}
