//! Pivot detection and pivot-pattern classification.
//!
//! # Algorithm
//!
//! 1. **Delta** signal: the first `step - 1` entries are 0, followed by
//!    `position[j] - position[j - step]` for every `j >= step`. Entry `k`
//!    therefore measures the drift that ends at row `k + 1`, and the signal
//!    is one entry shorter than the trace.
//! 2. **Sign changes** are sampled every `step` entries only. A change at
//!    `i` is flagged when the delta turns from negative to non-negative, or
//!    from positive to non-positive, between `i - step` and `i`. A sample
//!    past the end of the signal counts as no change.
//! 3. **Threshold**: a flagged change becomes a pivot only if it lies at
//!    least `curve_delta_threshold` pixels (horizontally) from the last
//!    accepted pivot.
//! 4. **Pattern**: the pivot count and the thirds the pivots fall into
//!    select the [`ShapeLabel`].

use spinetrace_common::{SpineError, SpineResult};
use spinetrace_model::label::{CurveDirection, ShapeLabel, VerticalThird};
use spinetrace_model::pivot::Pivot;

/// Finite-difference signal over a `step`-row window.
///
/// Holds `step - 1` zeros followed by one entry per row from `step` on, so
/// `delta[k] = position[k + 1] - position[k + 1 - step]` once `k >= step - 1`.
pub fn delta_sequence(positions: &[u32], step: usize) -> Vec<i64> {
    let lead = step.saturating_sub(1);
    let tail = positions
        .iter()
        .zip(positions.iter().skip(step))
        .map(|(&earlier, &later)| later as i64 - earlier as i64);
    std::iter::repeat(0).take(lead).chain(tail).collect()
}

/// Whether the delta signal changes direction between `previous` and `current`.
///
/// Zero counts as "non-negative" when leaving a falling run and as
/// "non-positive" when leaving a rising run, so a bend that flattens out
/// still registers.
pub fn is_sign_change(previous: i64, current: i64) -> bool {
    (current >= 0 && previous < 0) || (current <= 0 && previous > 0)
}

/// Whether the sample at `index` turns the signal relative to `index - step`.
///
/// Indices beyond the signal never flag a change.
pub fn changes_direction_at(deltas: &[i64], index: usize, step: usize) -> bool {
    let previous = index.checked_sub(step).and_then(|p| deltas.get(p));
    match (previous, deltas.get(index)) {
        (Some(&previous), Some(&current)) => is_sign_change(previous, current),
        _ => false,
    }
}

/// Detect pivots along a position sequence.
///
/// The returned list always starts with the synthetic pivot
/// `(positions[0], 0)` and is strictly increasing in index. An empty
/// sequence is rejected with [`SpineError::EmptyStroke`].
pub fn detect_pivots(
    positions: &[u32],
    step: usize,
    curve_delta_threshold: u32,
) -> SpineResult<Vec<Pivot>> {
    let deltas = delta_sequence(positions, step);
    detect_pivots_with_deltas(positions, &deltas, step, curve_delta_threshold)
}

pub(crate) fn detect_pivots_with_deltas(
    positions: &[u32],
    deltas: &[i64],
    step: usize,
    curve_delta_threshold: u32,
) -> SpineResult<Vec<Pivot>> {
    let Some(&start) = positions.first() else {
        return Err(SpineError::EmptyStroke);
    };
    if step == 0 {
        return Err(SpineError::config("step must be at least 1"));
    }

    let mut pivots = vec![Pivot::new(start, 0)];

    for i in (step..positions.len()).step_by(step) {
        if !changes_direction_at(deltas, i, step) {
            continue;
        }

        let x = positions[i];
        let last = pivots[pivots.len() - 1];
        let distance = last.distance_to(x);
        if distance >= curve_delta_threshold {
            tracing::debug!(index = i, x, distance, "Accepted pivot");
            pivots.push(Pivot::new(x, i));
        } else {
            tracing::debug!(index = i, x, distance, "Rejected pivot below threshold");
        }
    }

    Ok(pivots)
}

/// Map a pivot list over a trace of `len` entries to a shape label.
///
/// - one pivot: straight
/// - two pivots: a single bend, placed by the third the bend falls in
/// - three pivots with the bends in the upper and bottom thirds: an S shape;
///   rising-then-falling is the *inverted* S. Other three-pivot layouts are
///   named after the first bend alone.
/// - anything else: unrecognised
pub fn label_for_pivots(pivots: &[Pivot], len: usize) -> ShapeLabel {
    match pivots {
        [_] => ShapeLabel::Straight,
        [first, bend] => single_bend(first, bend, len),
        [first, upper, lower] => {
            let s_layout = VerticalThird::of(upper.index, len) == VerticalThird::Upper
                && VerticalThird::of(lower.index, len) == VerticalThird::Bottom;
            if !s_layout {
                single_bend(first, upper, len)
            } else if upper.x > first.x && lower.x < upper.x {
                ShapeLabel::InvertedSCurved
            } else {
                ShapeLabel::SCurved
            }
        }
        _ => ShapeLabel::Unrecognised,
    }
}

fn single_bend(first: &Pivot, bend: &Pivot, len: usize) -> ShapeLabel {
    let direction = if bend.x > first.x {
        CurveDirection::Right
    } else {
        CurveDirection::Left
    };
    ShapeLabel::Curved {
        region: VerticalThird::of(bend.index, len),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: usize = 8;
    const THRESHOLD: u32 = 15;

    /// Piecewise-linear trace through `(row, x)` knots, one entry per row.
    fn knots(points: &[(usize, i64)], len: usize) -> Vec<u32> {
        (0..len)
            .map(|r| {
                let last = points[points.len() - 1];
                if r >= last.0 {
                    return last.1 as u32;
                }
                let seg = points.windows(2).find(|w| r >= w[0].0 && r < w[1].0);
                match seg {
                    Some(w) => {
                        let (r0, x0) = w[0];
                        let (r1, x1) = w[1];
                        (x0 + (x1 - x0) * (r - r0) as i64 / (r1 - r0) as i64) as u32
                    }
                    None => points[0].1 as u32,
                }
            })
            .collect()
    }

    fn classify(positions: &[u32]) -> (Vec<Pivot>, ShapeLabel) {
        let pivots = detect_pivots(positions, STEP, THRESHOLD).unwrap();
        let label = label_for_pivots(&pivots, positions.len());
        (pivots, label)
    }

    #[test]
    fn test_delta_sequence_shape() {
        let positions: Vec<u32> = (0..12).map(|i| 100 + i * 2).collect();
        let deltas = delta_sequence(&positions, STEP);
        assert_eq!(deltas.len(), positions.len() - 1);
        assert!(deltas[..STEP - 1].iter().all(|&d| d == 0));
        assert!(deltas[STEP - 1..].iter().all(|&d| d == 16));
    }

    #[test]
    fn test_delta_entry_ends_one_row_later() {
        let positions = [100, 100, 100, 100, 100, 100, 100, 100, 130, 130];
        let deltas = delta_sequence(&positions, STEP);
        assert_eq!(deltas, vec![0, 0, 0, 0, 0, 0, 0, 30, 30]);
    }

    #[test]
    fn test_short_traces_keep_leading_zeros() {
        assert_eq!(delta_sequence(&[5, 6, 7], STEP), vec![0; STEP - 1]);
        assert_eq!(delta_sequence(&[5, 9], 1), vec![4]);
    }

    #[test]
    fn test_sample_past_the_signal_is_no_change() {
        let deltas = [5, 0, -5];
        assert!(changes_direction_at(&deltas, 2, 2));
        assert!(!changes_direction_at(&deltas, 3, 2));
        assert!(!changes_direction_at(&deltas, 1, 2));
    }

    #[test]
    fn test_reversal_on_the_final_sampled_row_is_ignored() {
        // 17 rows: the jump to 130 is only seen at row 8 (no change), and
        // the swing back to 80 lands on row 16, which has no delta entry.
        let mut positions = vec![100u32; 8];
        positions.extend([130; 8]);
        positions.push(80);
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots, vec![Pivot::new(100, 0)]);
        assert_eq!(label.to_string(), "straight spine");
    }

    #[test]
    fn test_sign_change_policy() {
        assert!(is_sign_change(-3, 0));
        assert!(is_sign_change(-3, 4));
        assert!(is_sign_change(3, 0));
        assert!(is_sign_change(3, -4));
        assert!(!is_sign_change(0, 5));
        assert!(!is_sign_change(0, -5));
        assert!(!is_sign_change(0, 0));
        assert!(!is_sign_change(2, 7));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let err = detect_pivots(&[], STEP, THRESHOLD).unwrap_err();
        assert!(err.is_empty_stroke());
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert!(matches!(
            detect_pivots(&[1, 2, 3], 0, THRESHOLD),
            Err(SpineError::Config { .. })
        ));
    }

    #[test]
    fn test_single_row_is_straight() {
        let (pivots, label) = classify(&[42]);
        assert_eq!(pivots, vec![Pivot::new(42, 0)]);
        assert_eq!(label, ShapeLabel::Straight);
    }

    #[test]
    fn test_vertical_line_is_straight() {
        let (pivots, label) = classify(&[100; 100]);
        assert_eq!(pivots, vec![Pivot::new(100, 0)]);
        assert_eq!(label.to_string(), "straight spine");
    }

    #[test]
    fn test_steady_drift_without_reversal_is_straight() {
        let positions: Vec<u32> = (0..120).map(|i| 20 + i).collect();
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots.len(), 1);
        assert_eq!(label, ShapeLabel::Straight);
    }

    #[test]
    fn test_drift_out_and_back_bends_in_the_middle() {
        // 50 -> 150 over rows 0..=50, back to 50 by row 100.
        let positions = knots(&[(0, 50), (50, 150), (100, 50)], 101);
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots, vec![Pivot::new(50, 0), Pivot::new(138, 56)]);
        assert_eq!(label.to_string(), "centered right-curved spine");
    }

    #[test]
    fn test_bottom_third_bend() {
        // Straight at 100, bends right over rows 72..88, then straight at 132.
        let positions = knots(&[(0, 100), (72, 100), (88, 132)], 100);
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots, vec![Pivot::new(100, 0), Pivot::new(132, 96)]);
        assert_eq!(label.to_string(), "bottom right-curved spine");
    }

    #[test]
    fn test_upper_third_left_bend() {
        let positions = knots(&[(0, 140), (10, 100)], 96);
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots, vec![Pivot::new(140, 0), Pivot::new(100, 24)]);
        assert_eq!(label.to_string(), "upper left-curved spine");
    }

    #[test]
    fn test_wiggle_below_threshold_collapses() {
        // 10px square wave: every flagged change is rejected.
        let mut positions = vec![100u32; 64];
        for (i, x) in positions.iter_mut().enumerate() {
            if (12..28).contains(&i) || (44..60).contains(&i) {
                *x = 110;
            }
        }
        let (pivots, label) = classify(&positions);
        assert_eq!(pivots, vec![Pivot::new(100, 0)]);
        assert_eq!(label, ShapeLabel::Straight);
    }

    #[test]
    fn test_wiggle_above_threshold_is_unrecognised() {
        let mut positions = vec![100u32; 64];
        for (i, x) in positions.iter_mut().enumerate() {
            if (12..28).contains(&i) || (44..60).contains(&i) {
                *x = 120;
            }
        }
        let (pivots, label) = classify(&positions);
        assert_eq!(
            pivots,
            vec![
                Pivot::new(100, 0),
                Pivot::new(120, 24),
                Pivot::new(100, 40),
                Pivot::new(120, 56),
            ]
        );
        assert_eq!(label.to_string(), "unrecognised spine");
    }

    #[test]
    fn test_rising_then_falling_is_inverted_s() {
        let positions = knots(&[(0, 100), (10, 140), (40, 140), (60, 100)], 96);
        let (pivots, label) = classify(&positions);
        assert_eq!(
            pivots,
            vec![Pivot::new(100, 0), Pivot::new(140, 24), Pivot::new(100, 72)]
        );
        assert_eq!(label.to_string(), "inverted S-curved spine");
    }

    #[test]
    fn test_falling_then_rising_is_s() {
        let positions = knots(&[(0, 140), (10, 100), (40, 100), (60, 140)], 96);
        let (pivots, label) = classify(&positions);
        assert_eq!(
            pivots,
            vec![Pivot::new(140, 0), Pivot::new(100, 24), Pivot::new(140, 72)]
        );
        assert_eq!(label.to_string(), "S-curved spine");
    }

    #[test]
    fn test_three_pivots_outside_s_layout_use_first_bend() {
        let positions = knots(&[(0, 100), (24, 100), (34, 140), (60, 140), (70, 100)], 96);
        let (pivots, label) = classify(&positions);
        assert_eq!(
            pivots,
            vec![Pivot::new(100, 0), Pivot::new(140, 48), Pivot::new(100, 80)]
        );
        assert_eq!(label.to_string(), "centered right-curved spine");
    }

    #[test]
    fn test_label_for_pivots_edge_counts() {
        assert_eq!(label_for_pivots(&[], 10), ShapeLabel::Unrecognised);
        let equal_x = [Pivot::new(50, 0), Pivot::new(50, 9)];
        assert_eq!(
            label_for_pivots(&equal_x, 10).to_string(),
            "bottom left-curved spine"
        );
    }
}
