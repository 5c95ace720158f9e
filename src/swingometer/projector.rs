use std::hash::Hash;

use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::debug;

use crate::{
    label::{filter_nearby, Label, DEFAULT_LABEL_TOLERANCE},
    threshold::{flip_point, ThresholdList},
    types::{current_color, in_focus, CurrentResults, District, Dot, Party, Rgb, SeatFilter},
};

/// Display tuning for the swingometer.
#[derive(Clone, Debug, PartialEq)]
pub struct SwingometerOptions {
    /// Seat numbers labelled along the axis are multiples of this.
    pub label_increment: usize,
    /// Minimum spacing between labels on the axis.
    pub label_tolerance: f64,
}

impl Default for SwingometerOptions {
    fn default() -> Self {
        Self { label_increment: 10, label_tolerance: DEFAULT_LABEL_TOLERANCE }
    }
}

/// Everything the swingometer screen draws, for one input snapshot.
///
/// Positions on the axis measure swing toward `right`; a district's dot sits
/// at the swing where it would change hands.
#[derive(Clone, Debug, Serialize)]
pub struct SwingometerOutput {
    pub left: Party,
    pub right: Party,
    /// Current swing toward `right`.
    pub swing: f64,
    /// Swing toward `left` it needs for a majority (`+inf` when out of range).
    pub left_to_win: f64,
    /// Swing toward `right` it needs for a majority (`+inf` when out of range).
    pub right_to_win: f64,
    pub seats_left: usize,
    pub seats_right: usize,
    pub projected_seats_left: usize,
    pub projected_seats_right: usize,
    pub labels: Vec<Label>,
    pub dots: Vec<Dot>,
}

/// Two-party swing projection.
#[derive(Clone, Debug)]
pub struct Swingometer {
    left: Party,
    right: Party,
    options: SwingometerOptions,
}

impl Swingometer {
    pub fn new(left: Party, right: Party, options: SwingometerOptions) -> Result<Self> {
        ensure!(left != right, "[Swingometer::new] left and right must be different parties ({left})");
        ensure!(options.label_increment > 0, "[Swingometer::new] label_increment must be positive");
        ensure!(options.label_tolerance >= 0.0, "[Swingometer::new] label_tolerance must be non-negative");
        Ok(Self { left, right, options })
    }

    #[inline] pub fn left(&self) -> &Party { &self.left }

    #[inline] pub fn right(&self) -> &Party { &self.right }

    #[inline] pub fn options(&self) -> &SwingometerOptions { &self.options }

    /// Recompute the full screen state from scratch.
    pub fn project<K: Eq + Hash>(
        &self,
        districts: &[District<K>],
        swing: f64,
        results: &CurrentResults<K>,
        filter: Option<&SeatFilter<K>>,
    ) -> Result<SwingometerOutput> {
        ensure!(swing.is_finite(), "[Swingometer::project] swing must be finite, got {swing}");

        let (left, right) = (&self.left, &self.right);
        let total_districts = districts.len();

        // Flip points toward each side; one list is the negation of the other.
        let left_list = ThresholdList::build(districts, left, right)?;
        let right_list = ThresholdList::build(districts, right, left)?;

        let seats_left = left_list.seats_below(0.0);
        let seats_right = left_list.len() - seats_left;

        let projected_seats_right = right_list.seats_below(swing);
        let projected_seats_left = right_list.len() - projected_seats_right;

        let mut labels = Vec::new();
        labels.extend(self.lead_change_label(&left_list, &right_list, seats_left, seats_right));
        labels.extend(self.increment_labels(&left_list, &right_list, total_districts));
        let labels = filter_nearby(labels, self.options.label_tolerance);

        let dots = districts.iter()
            .filter_map(|district| {
                flip_point(district, right, left).map(|position| Dot {
                    position,
                    color: current_color(results, &district.key),
                    in_focus: in_focus(filter, &district.key),
                })
            })
            .collect::<Vec<_>>();

        let output = SwingometerOutput {
            left: left.clone(),
            right: right.clone(),
            swing,
            left_to_win: left_list.swing_for_majority(total_districts),
            right_to_win: right_list.swing_for_majority(total_districts),
            seats_left,
            seats_right,
            projected_seats_left,
            projected_seats_right,
            labels,
            dots,
        };

        debug!(
            %left, %right,
            districts = total_districts,
            contested = left_list.len(),
            left_to_win = output.left_to_win,
            right_to_win = output.right_to_win,
            "projected swingometer"
        );

        Ok(output)
    }

    /// Marker at the swing where the trailing side draws level with, or
    /// overtakes, the current leader.
    fn lead_change_label(&self, left_list: &ThresholdList, right_list: &ThresholdList,
        seats_left: usize, seats_right: usize,
    ) -> Option<Label> {
        let contested = left_list.len();
        let seat = contested.div_ceil(2);

        let (position, challenger) = if seats_left > seats_right {
            (right_list.seat_at(seat)?, &self.right)
        } else if seats_right > seats_left {
            (-left_list.seat_at(seat)?, &self.left)
        } else {
            return None;
        };

        let color = if contested % 2 == 0 { Rgb::BLACK } else { challenger.color() };
        Some(Label::new(position, color, seat.to_string()))
    }

    /// Seat-count markers beyond the midpoint, for both sides. Rank `k` is
    /// labeled with `k` and sits at the swing where seat `k + 1` flips.
    fn increment_labels(&self, left_list: &ThresholdList, right_list: &ThresholdList,
        total_districts: usize,
    ) -> Vec<Label> {
        let midpoint = total_districts / 2;
        let increment = self.options.label_increment;
        let ranks = left_list.len().max(right_list.len());

        let mut labels = Vec::new();
        for k in (0..ranks).step_by(increment).filter(|&k| k > midpoint) {
            if let Some(t) = right_list.at_rank(k) {
                labels.push(Label::new(t, self.right.color(), k.to_string()));
            }
            if let Some(t) = left_list.at_rank(k) {
                labels.push(Label::new(-t, self.left.color(), k.to_string()));
            }
        }
        labels
    }
}
