use anyhow::{ensure, Result};
use serde::Serialize;
use tracing::debug;

use super::{shares::ShareTable, swing::calculate_swing};
use crate::types::{Party, Rgb};

/// Default step between sampled other-party swings.
pub const DEFAULT_BUCKET_SIZE: f64 = 0.01;

/// Largest number of samples taken on either side of zero.
pub const MAX_LINE_STEPS: i64 = 100_000;

/// Iso-response curve: swing combinations at which `party` just holds a
/// majority. Points are ordered by the swing between the other two parties
/// and use the axis order of the `parties` passed to [`calculate_line`].
#[derive(Clone, Debug, Serialize)]
pub struct Line {
    pub party: Party,
    pub color: Rgb,
    pub points: Vec<[f64; 3]>,
}

/// Trace the majority line of `parties[focus]` over other-party swings in
/// `[-limit, +limit]`, sampled every `bucket_size`. Samples with no result
/// are skipped, leaving gaps.
pub fn calculate_line(
    focus: usize,
    parties: [&Party; 3],
    shares: &ShareTable,
    limit: f64,
    bucket_size: f64,
) -> Result<Line> {
    ensure!(focus < 3, "[calculate_line] focus index {focus} out of range");
    ensure!(limit.is_finite() && limit >= 0.0, "[calculate_line] limit must be finite and non-negative, got {limit}");
    ensure!(bucket_size.is_finite() && bucket_size > 0.0, "[calculate_line] bucket_size must be positive, got {bucket_size}");

    let party = parties[focus];
    let [first, second] = match focus {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    };

    // Integer steps keep the sample grid exact and symmetric around zero.
    let ratio = (limit / bucket_size).round();
    ensure!(ratio <= MAX_LINE_STEPS as f64,
        "[calculate_line] limit / bucket_size gives {ratio} steps, at most {MAX_LINE_STEPS} allowed");
    let steps = ratio as i64;
    let points = (-steps..=steps)
        .filter_map(|i| {
            let other_swing = i as f64 * bucket_size;
            let swing = calculate_swing(party, [parties[first], parties[second]], shares, other_swing)?;

            let mut point = [0.0; 3];
            point[focus] = swing;
            point[first] = -0.5 * swing - other_swing;
            point[second] = -0.5 * swing + other_swing;
            Some(point)
        })
        .collect::<Vec<_>>();

    debug!(%party, samples = 2 * steps + 1, resolved = points.len(), "calculated line");
    Ok(Line { party: party.clone(), color: party.color(), points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::District;

    fn trio() -> (Party, Party, Party) {
        (
            Party::new("Left", "L", Rgb::new(255, 0, 0)),
            Party::new("Right", "R", Rgb::new(0, 0, 255)),
            Party::new("Bottom", "B", Rgb::new(255, 200, 0)),
        )
    }

    fn shares(l: &Party, r: &Party, b: &Party) -> ShareTable {
        let rows = [[40, 35, 25], [30, 45, 25], [25, 30, 45], [45, 25, 30], [35, 33, 32]];
        let districts = rows.iter().enumerate()
            .map(|(i, v)| District::new(i, [(l.clone(), v[0]), (r.clone(), v[1]), (b.clone(), v[2])]))
            .collect::<Vec<_>>();
        ShareTable::from_districts(&districts)
    }

    #[test]
    fn samples_symmetric_grid() {
        let (l, r, b) = trio();
        let table = shares(&l, &r, &b);
        let line = calculate_line(0, [&l, &r, &b], &table, 0.05, 0.01).unwrap();
        assert_eq!(line.points.len(), 11);
        assert_eq!(line.color, l.color());
        assert_eq!(line.party, l);
    }

    #[test]
    fn points_sum_to_zero_and_carry_other_swing() {
        let (l, r, b) = trio();
        let table = shares(&l, &r, &b);
        let line = calculate_line(1, [&l, &r, &b], &table, 0.03, 0.01).unwrap();

        for (i, point) in line.points.iter().enumerate() {
            assert!(point.iter().sum::<f64>().abs() < 1e-12);
            // Focus is R; the others are L then B.
            let other_swing = (i as f64 - 3.0) * 0.01;
            assert!((point[2] - point[0] - 2.0 * other_swing).abs() < 1e-12);
        }
    }

    #[test]
    fn focus_axis_matches_calculate_swing() {
        let (l, r, b) = trio();
        let table = shares(&l, &r, &b);
        let line = calculate_line(2, [&l, &r, &b], &table, 0.0, 0.01).unwrap();
        let expected = calculate_swing(&b, [&l, &r], &table, 0.0).unwrap();
        assert_eq!(line.points.len(), 1);
        assert_eq!(line.points[0][2], expected);
    }

    #[test]
    fn unresolved_samples_leave_gaps() {
        let (l, r, b) = trio();
        // B stands only in one district of three and can never reach a majority.
        let districts = vec![
            District::new(0, [(l.clone(), 50), (r.clone(), 49)]),
            District::new(1, [(l.clone(), 40), (r.clone(), 60)]),
            District::new(2, [(l.clone(), 30), (r.clone(), 40), (b.clone(), 30)]),
        ];
        let table = ShareTable::from_districts(&districts);
        let line = calculate_line(2, [&l, &r, &b], &table, 0.1, 0.01).unwrap();
        assert!(line.points.is_empty());
    }

    #[test]
    fn rejects_bad_grid() {
        let (l, r, b) = trio();
        let table = ShareTable::default();
        assert!(calculate_line(0, [&l, &r, &b], &table, 0.1, 0.0).is_err());
        assert!(calculate_line(0, [&l, &r, &b], &table, -0.1, 0.01).is_err());
        assert!(calculate_line(3, [&l, &r, &b], &table, 0.1, 0.01).is_err());
    }

    #[test]
    fn rejects_oversized_grid() {
        let (l, r, b) = trio();
        let table = shares(&l, &r, &b);
        assert!(calculate_line(0, [&l, &r, &b], &table, 1.0, 1e-300).is_err());
        assert!(calculate_line(0, [&l, &r, &b], &table, 1e300, 0.01).is_err());

        let edge = calculate_line(0, [&l, &r, &b], &table, MAX_LINE_STEPS as f64, 1.0).unwrap();
        assert!(edge.points.len() <= 2 * MAX_LINE_STEPS as usize + 1);
    }
}
