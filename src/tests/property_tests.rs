//! Property-based tests using proptest.
//!
//! These pin the invariants that must hold for *any* input: quantifier
//! duality, filtering laws, and the soft extraction grammar.

use proptest::prelude::*;

use crate::core::block::BlockRef;
use crate::core::query::BlockSliceExt;
use crate::detail;
use crate::grid::memory::{BlockSpec, MemoryGrid};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Bank of lights whose on/off switches mirror `flags`
fn light_bank(flags: &[bool]) -> Vec<BlockRef> {
    let grid = MemoryGrid::new();
    flags
        .iter()
        .enumerate()
        .map(|(i, on)| {
            let spec = BlockSpec::light(&format!("Light {}", i));
            let spec = if *on { spec } else { spec.disabled() };
            grid.add(spec)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Quantifier properties
// ---------------------------------------------------------------------------

proptest! {
    /// Some block satisfies the predicate exactly when not every block
    /// satisfies its negation.
    #[test]
    fn any_is_the_dual_of_all(flags in prop::collection::vec(any::<bool>(), 0..32)) {
        let blocks = light_bank(&flags);

        let some_on = blocks.any(|b| b.is_working());
        let all_off = blocks.all(|b| !b.is_working());
        prop_assert_eq!(some_on, !all_off);

        // and both agree with the plain flag population
        prop_assert_eq!(some_on, flags.iter().any(|on| *on));
    }

    /// `filtered` returns exactly the satisfying blocks, in list order.
    #[test]
    fn filtered_is_an_ordered_subset(flags in prop::collection::vec(any::<bool>(), 0..32)) {
        let blocks = light_bank(&flags);
        let lit = blocks.filtered(|b| b.is_working());

        let expected: Vec<String> = blocks
            .iter()
            .zip(&flags)
            .filter(|(_, on)| **on)
            .map(|(b, _)| b.name())
            .collect();
        let actual: Vec<String> = lit.iter().map(|b| b.name()).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ---------------------------------------------------------------------------
// Extraction properties
// ---------------------------------------------------------------------------

proptest! {
    /// One-decimal meter reports parse back to within half a display step.
    #[test]
    fn position_extraction_round_trips(value in 0.0f32..100.0) {
        let text = format!("Current position: {:.1}m", value);
        let parsed = detail::piston_position(&text)
            .expect("a rendered position always matches the grammar");
        prop_assert!(
            (parsed - value).abs() <= 0.05 + 1e-4,
            "parsed {} too far from {}", parsed, value
        );
    }

    /// Whole-degree reports parse back exactly, sign included.
    #[test]
    fn angle_extraction_round_trips(degrees in -360i32..=360) {
        let text = format!("Current angle: {}°", degrees);
        prop_assert_eq!(detail::motor_angle(&text), Some(degrees as f32));
    }

    /// Text without digits never yields a reading, whatever else it holds.
    #[test]
    fn extraction_without_digits_is_none(text in "[A-Za-z :@#\\n]*") {
        prop_assert_eq!(detail::piston_position(&text), None);
        prop_assert_eq!(detail::motor_angle(&text), None);
    }
}

// ---------------------------------------------------------------------------
// Action dispatch properties
// ---------------------------------------------------------------------------

proptest! {
    /// Unknown action names always fail and never mutate the block.
    #[test]
    fn unknown_actions_never_mutate(name in "[a-z]{1,12}") {
        let grid = MemoryGrid::new();
        let light = grid.add(BlockSpec::light("L"));
        let before = light.is_enabled();

        prop_assert!(light.apply_action(&name).is_err());
        prop_assert_eq!(light.is_enabled(), before);
    }
}
