//! Landing gear view
//!
//! Lock status is not a typed host property; the host prints one of three
//! literals into the detail text and the view classifies by containment.
//! The literals (`Locked`, `Unlocked`, `Ready To Lock`) do not contain one
//! another under case-sensitive matching, so the three predicates are
//! mutually exclusive on host-generated text.

use std::ops::Deref;

use crate::core::block::{BlockRef, LockState};
use crate::core::{FacadeError, KindTag};

/// Typed view over a landing gear block
#[derive(Debug, Clone)]
pub struct LandingGear {
    block: BlockRef,
}

impl LandingGear {
    /// Narrow a handle into a landing gear view
    pub fn cast(block: &BlockRef) -> Result<Self, FacadeError> {
        super::check_kind(block, KindTag::LandingGear)?;
        Ok(Self {
            block: block.clone(),
        })
    }

    /// Whether the detail text reports the gear as locked to a surface
    pub fn is_locked(&self) -> bool {
        self.contains_label(LockState::Locked)
    }

    /// Whether the detail text reports the gear as unlocked
    pub fn is_unlocked(&self) -> bool {
        self.contains_label(LockState::Unlocked)
    }

    /// Whether the detail text reports a lockable surface in range
    pub fn is_ready_to_lock(&self) -> bool {
        self.contains_label(LockState::ReadyToLock)
    }

    /// Classify the lock status from the detail text
    ///
    /// Longer literals are checked first. `None` when the host printed no
    /// recognizable status at all.
    pub fn lock_state(&self) -> Option<LockState> {
        let text = self.block.detail_text();
        if text.contains(LockState::ReadyToLock.detail_label()) {
            Some(LockState::ReadyToLock)
        } else if text.contains(LockState::Unlocked.detail_label()) {
            Some(LockState::Unlocked)
        } else if text.contains(LockState::Locked.detail_label()) {
            Some(LockState::Locked)
        } else {
            None
        }
    }

    fn contains_label(&self, state: LockState) -> bool {
        self.block.detail_text().contains(state.detail_label())
    }

    /// Underlying block handle
    pub fn block(&self) -> &BlockRef {
        &self.block
    }
}

impl Deref for LandingGear {
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
    fn predicates_are_mutually_exclusive_per_state() {
        let grid = MemoryGrid::new();
        for (spec, expected) in [
            (BlockSpec::landing_gear("G").locked(), LockState::Locked),
            (BlockSpec::landing_gear("G").unlocked(), LockState::Unlocked),
            (
                BlockSpec::landing_gear("G").ready_to_lock(),
                LockState::ReadyToLock,
            ),
        ] {
            let gear = LandingGear::cast(&grid.add(spec)).unwrap();
            assert_eq!(gear.lock_state(), Some(expected));
            assert_eq!(gear.is_locked(), expected == LockState::Locked);
            assert_eq!(gear.is_unlocked(), expected == LockState::Unlocked);
            assert_eq!(gear.is_ready_to_lock(), expected == LockState::ReadyToLock);
        }
    }
}
