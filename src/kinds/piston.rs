//! Piston view
//!
//! Pistons travel between a configured minimum and maximum extension. The
//! limits and velocity are typed host properties; the current position is
//! only reported through the detail text and is read with the shared
//! extraction grammar. A piston counts as expanded or contracted when the
//! reported position sits within a small tolerance of the matching limit,
//! since the report carries one decimal of precision.

use std::ops::Deref;

use crate::core::block::{BlockRef, KindState};
use crate::core::{FacadeError, KindTag};
use crate::detail;

/// Default slack when comparing a reported position against a limit, in meters
///
/// Half a display step: positions are reported with one decimal place.
pub const DEFAULT_POSITION_TOLERANCE: f32 = 0.05;

/// Typed view over a piston block
#[derive(Debug, Clone)]
pub struct Piston {
    block: BlockRef,
    tolerance: f32,
}

impl Piston {
    /// Narrow a handle into a piston view
    pub fn cast(block: &BlockRef) -> Result<Self, FacadeError> {
        super::check_kind(block, KindTag::Piston)?;
        Ok(Self {
            block: block.clone(),
            tolerance: DEFAULT_POSITION_TOLERANCE,
        })
    }

    /// Override the limit-comparison tolerance in meters
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn fields(&self) -> (f32, f32, f32) {
        match self.block.kind_state() {
            KindState::Piston {
                min_limit,
                max_limit,
                velocity,
                ..
            } => (min_limit, max_limit, velocity),
            _ => unreachable!("kind variant is fixed at creation"),
        }
    }

    /// Shortest configured extension, in meters
    pub fn min_limit(&self) -> f32 {
        self.fields().0
    }

    /// Longest configured extension, in meters
    pub fn max_limit(&self) -> f32 {
        self.fields().1
    }

    /// Current travel velocity, in meters per second
    pub fn velocity(&self) -> f32 {
        self.fields().2
    }

    /// Position reported in the detail text, in meters
    ///
    /// `None` when the host has not printed a readable position.
    pub fn position(&self) -> Option<f32> {
        detail::piston_position(&self.block.detail_text())
    }

    /// Whether the reported position has reached the maximum limit
    ///
    /// An unreadable position is never at a limit.
    pub fn is_expanded(&self) -> bool {
        self.at_limit(self.max_limit())
    }

    /// Whether the reported position has reached the minimum limit
    pub fn is_contracted(&self) -> bool {
        self.at_limit(self.min_limit())
    }

    fn at_limit(&self, limit: f32) -> bool {
        self.position()
            .map_or(false, |position| (position - limit).abs() <= self.tolerance)
    }

    /// Underlying block handle
    pub fn block(&self) -> &BlockRef {
        &self.block
    }
}

impl Deref for Piston {
    type Target = BlockRef;

    fn deref(&self) -> &BlockRef {
        &self.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::memory::{BlockSpec, MemoryGrid};

    #[test]
    fn tolerance_window_decides_limit_hits() {
        let grid = MemoryGrid::new();
        let block = grid.add(
            BlockSpec::piston("Piston 1")
                .with_limits(0.0, 5.0)
                .at_position(4.96),
        );
        let piston = Piston::cast(&block).unwrap();

        // reported as 5.0m, within half a display step of the limit
        assert!(piston.is_expanded());
        assert!(!piston.is_contracted());

        let strict = piston.clone().with_tolerance(0.001);
        assert!(strict.is_expanded(), "report already rounds to the limit");
    }

    #[test]
    fn midway_piston_is_neither_expanded_nor_contracted() {
        let grid = MemoryGrid::new();
        let block = grid.add(
            BlockSpec::piston("Piston 1")
                .with_limits(0.0, 5.0)
                .at_position(2.5),
        );
        let piston = Piston::cast(&block).unwrap();

        assert_eq!(piston.position(), Some(2.5));
        assert!(!piston.is_expanded());
        assert!(!piston.is_contracted());
    }
}
