//! Core block model and shared types
//!
//! This module defines block identity, the sub-kind tags, and the error
//! taxonomy that the rest of the facade builds on.

pub mod action;
pub mod block;
pub mod query;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host-assigned identifier for a terminal block
///
/// Ids are minted by the grid host when a block enters the terminal system;
/// the facade never generates them, it only carries them around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockId(pub u64);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Terminal block sub-kind tag
///
/// The tag is populated once, when the host hands the block to the facade.
/// Every later kind check or cast is a plain tag comparison instead of a
/// speculative downcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KindTag {
    /// Plain terminal block with no kind-specific state
    Generic,
    /// Linear piston with position limits in meters
    Piston,
    /// Proximity sensor
    Sensor,
    /// Magnetic landing gear
    LandingGear,
    /// Rotor or hinge stator with angular limits
    Motor,
    /// Interior or exterior light
    Light,
}

impl KindTag {
    /// Get a human-readable name for the sub-kind
    pub fn display_name(&self) -> &str {
        match self {
            KindTag::Generic => "Terminal Block",
            KindTag::Piston => "Piston",
            KindTag::Sensor => "Sensor",
            KindTag::LandingGear => "Landing Gear",
            KindTag::Motor => "Motor",
            KindTag::Light => "Light",
        }
    }
}

impl std::fmt::Display for KindTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Errors surfaced by facade operations
///
/// Hard failures are raised synchronously to the caller; nothing is retried
/// or recovered internally. Detail-text extraction misses are not failures
/// and come back as `None` instead.
#[derive(Error, Debug)]
pub enum FacadeError {
    /// The block does not accept the requested action name
    #[error("Block '{block}' has no action '{action}'")]
    MissingAction { block: String, action: String },

    /// A narrowing cast was attempted against the wrong sub-kind
    #[error("Block '{block}' is not a {expected}")]
    WrongKind { block: String, expected: KindTag },

    /// Debug output was requested without a configured debug panel
    #[error("Debug panel is not configured or was not found on the grid")]
    MissingDebugPanel,
}
