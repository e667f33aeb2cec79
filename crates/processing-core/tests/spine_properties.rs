use proptest::prelude::*;

use spinetrace_core::boundary::{extract_boundary, ExtractOptions};
use spinetrace_core::classifier::SpineClassifier;
use spinetrace_core::pivots::{changes_direction_at, delta_sequence, detect_pivots};
use spinetrace_model::label::ShapeLabel;
use spinetrace_model::pivot::Pivot;
use spinetrace_model::raster::{RasterBuffer, Rgba};

const STEP: usize = 8;
const THRESHOLD: u32 = 15;

/// Random sparse ink on a small raster.
fn arb_raster() -> impl Strategy<Value = RasterBuffer> {
    (1u32..40, 1u32..40).prop_flat_map(|(w, h)| {
        prop::collection::vec((0..w, 0..h, 1u8..=255), 0..60).prop_map(move |dots| {
            let mut raster = RasterBuffer::new(w, h).unwrap();
            for (x, y, a) in dots {
                raster.set_pixel(x, y, Rgba([0, 0, 0, a]));
            }
            raster
        })
    })
}

/// Monotone (non-decreasing or non-increasing) position sequences.
fn arb_monotone_positions() -> impl Strategy<Value = Vec<u32>> {
    (
        1usize..200,
        0u32..300,
        prop::collection::vec(0u32..4, 200),
        any::<bool>(),
    )
        .prop_map(|(len, start, steps, rising)| {
            let mut x = start + 1_000;
            let mut positions = Vec::with_capacity(len);
            for s in steps.into_iter().take(len) {
                positions.push(x);
                x = if rising { x + s } else { x - s };
            }
            positions
        })
}

proptest! {
    #[test]
    fn monotone_traces_are_straight(positions in arb_monotone_positions()) {
        let deltas = delta_sequence(&positions, STEP);
        let any_change = (STEP..positions.len())
            .step_by(STEP)
            .any(|i| changes_direction_at(&deltas, i, STEP));
        prop_assume!(!any_change);

        let label = SpineClassifier::with_defaults().classify_positions(&positions).unwrap();
        prop_assert_eq!(label, ShapeLabel::Straight);
    }

    #[test]
    fn delta_signal_is_one_row_short(positions in prop::collection::vec(0u32..500, STEP..300)) {
        let deltas = delta_sequence(&positions, STEP);
        prop_assert_eq!(deltas.len(), positions.len() - 1);
        for (k, &delta) in deltas.iter().enumerate().skip(STEP - 1) {
            prop_assert_eq!(delta, positions[k + 1] as i64 - positions[k + 1 - STEP] as i64);
        }
    }

    #[test]
    fn first_pivot_is_the_starting_point(positions in prop::collection::vec(0u32..500, 1..300)) {
        let pivots = detect_pivots(&positions, STEP, THRESHOLD).unwrap();
        prop_assert_eq!(pivots[0], Pivot::new(positions[0], 0));
        prop_assert!(pivots.windows(2).all(|w| w[0].index < w[1].index));
        prop_assert!(pivots.windows(2).all(|w| w[0].distance_to(w[1].x) >= THRESHOLD));
    }

    #[test]
    fn extraction_stays_in_bounds(raster in arb_raster()) {
        let mut scanned = raster.clone();
        let trace = extract_boundary(&mut scanned, ExtractOptions::default());
        prop_assert!(trace.positions.iter().all(|&x| x < raster.width()));
        prop_assert_eq!(trace.len(), raster.inked_rows());
        prop_assert!(trace.rows.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn classification_is_deterministic(raster in arb_raster()) {
        let classifier = SpineClassifier::with_defaults();
        let first = classifier.classify(&mut raster.clone());
        let second = classifier.classify(&mut raster.clone());
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert!(a.is_empty_stroke());
                prop_assert!(b.is_empty_stroke());
            }
            _ => prop_assert!(false, "runs disagreed"),
        }
    }

    #[test]
    fn debug_inversion_does_not_change_the_trace(raster in arb_raster()) {
        let mut mutated = raster.clone();
        let mut untouched = raster.clone();
        let with_debug = extract_boundary(&mut mutated, ExtractOptions::default());
        let without = extract_boundary(&mut untouched, ExtractOptions::read_only());
        prop_assert_eq!(with_debug, without);
        prop_assert_eq!(untouched, raster);
    }
}
