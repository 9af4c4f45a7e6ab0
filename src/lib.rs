//! Grid Facade - typed block control for grid terminal scripts
//!
//! This crate wraps an opaque grid terminal host with a small, typed facade:
//! block discovery by name or sub-kind, bulk iteration verbs, action
//! dispatch by host action id, per-kind status views with safe narrowing
//! casts, detail-text extraction, and a debug sink that logs into a panel
//! block's custom name. An in-memory host grid ships alongside so whole
//! script scenarios run under test without a live game host.

pub mod core;
pub mod detail;
pub mod facade;
pub mod grid;
pub mod kinds;
mod tests;

// Re-export commonly used types
pub use crate::core::action::{
    LOCK, ON_OFF_OFF, ON_OFF_ON, ON_OFF_TOGGLE, REVERSE, SWITCH_LOCK, UNLOCK,
};
pub use crate::core::block::{BlockRef, KindState, LockState};
pub use crate::core::query::BlockSliceExt;
pub use crate::core::{BlockId, FacadeError, KindTag};
pub use crate::facade::{FacadeConfig, GridFacade};
pub use crate::grid::memory::{BlockSpec, MemoryGrid};
pub use crate::grid::{BlockPredicate, GridTerminal};
pub use crate::kinds::{KindCasts, LandingGear, Light, Motor, Piston, Sensor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
