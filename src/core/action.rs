//! Action names and dispatch
//!
//! Terminal actions are host-defined magic strings invoked by name. The
//! facade passes names through verbatim and raises
//! [`FacadeError::MissingAction`] when a block does not accept one; it never
//! waits for or verifies the downstream effect (detail text catches up on a
//! later tick).

use log::debug;

use super::block::{BlockRef, BlockState, KindState, LockState};
use super::{FacadeError, KindTag};

/// Switch a block on
pub const ON_OFF_ON: &str = "OnOff_On";
/// Switch a block off
pub const ON_OFF_OFF: &str = "OnOff_Off";
/// Toggle the on/off switch
pub const ON_OFF_TOGGLE: &str = "OnOff";
/// Reverse a piston or motor's direction of travel
pub const REVERSE: &str = "Reverse";
/// Engage a landing gear's magnetic lock
pub const LOCK: &str = "Lock";
/// Release a landing gear's magnetic lock
pub const UNLOCK: &str = "Unlock";
/// Toggle a landing gear's magnetic lock
pub const SWITCH_LOCK: &str = "SwitchLock";

const BASE_ACTIONS: [&str; 3] = [ON_OFF_ON, ON_OFF_OFF, ON_OFF_TOGGLE];

/// Accepted-action list for a freshly created block of the given sub-kind
pub(crate) fn default_actions(kind: KindTag) -> Vec<String> {
    let mut actions: Vec<String> = BASE_ACTIONS.iter().map(|a| a.to_string()).collect();
    match kind {
        KindTag::Piston | KindTag::Motor => actions.push(REVERSE.to_string()),
        KindTag::LandingGear => {
            actions.extend([LOCK, UNLOCK, SWITCH_LOCK].iter().map(|a| a.to_string()));
        }
        _ => {}
    }
    actions
}

impl BlockState {
    /// Apply a known action's effect to the record
    ///
    /// Callers check [`accepts`](BlockState::accepts) first; names that slip
    /// through unmatched are left without effect.
    pub(crate) fn transition(&mut self, action: &str) {
        match action {
            ON_OFF_ON => self.enabled = true,
            ON_OFF_OFF => self.enabled = false,
            ON_OFF_TOGGLE => self.enabled = !self.enabled,
            REVERSE => match &mut self.kind {
                KindState::Piston { velocity, .. } => *velocity = -*velocity,
                KindState::Motor { velocity_rpm, .. } => *velocity_rpm = -*velocity_rpm,
                _ => {}
            },
            LOCK => {
                if let KindState::LandingGear { lock } = &mut self.kind {
                    *lock = LockState::Locked;
                }
            }
            UNLOCK => {
                if let KindState::LandingGear { lock } = &mut self.kind {
                    *lock = LockState::Unlocked;
                }
            }
            SWITCH_LOCK => {
                if let KindState::LandingGear { lock } = &mut self.kind {
                    *lock = match lock {
                        LockState::Locked => LockState::Unlocked,
                        _ => LockState::Locked,
                    };
                }
            }
            _ => {}
        }
    }
}

impl BlockRef {
    /// Invoke a host action by name
    ///
    /// # Arguments
    /// * `action` - Host action id, e.g. `"OnOff_On"` or `"Reverse"`
    ///
    /// # Returns
    /// `MissingAction` when the block does not accept the name; the record
    /// stays untouched in that case.
    pub fn apply_action(&self, action: &str) -> Result<(), FacadeError> {
        let mut state = self.state.write();
        if !state.accepts(action) {
            return Err(FacadeError::MissingAction {
                block: state.name.clone(),
                action: action.to_string(),
            });
        }
        debug!("[Action] '{}' on block '{}'", action, state.name);
        state.transition(action);
        Ok(())
    }

    /// Switch the block on
    pub fn turn_on(&self) -> Result<(), FacadeError> {
        self.apply_action(ON_OFF_ON)
    }

    /// Switch the block off
    pub fn turn_off(&self) -> Result<(), FacadeError> {
        self.apply_action(ON_OFF_OFF)
    }

    /// Toggle the on/off switch
    pub fn toggle_on_off(&self) -> Result<(), FacadeError> {
        self.apply_action(ON_OFF_TOGGLE)
    }

    /// Reverse the direction of travel (pistons and motors)
    pub fn reverse(&self) -> Result<(), FacadeError> {
        self.apply_action(REVERSE)
    }
}
