//! Block records and shared handles
//!
//! A terminal block lives in exactly one host grid. The host owns the
//! record; scripts hold cheap-clone [`BlockRef`] handles and go through them
//! for every read and mutation. Reads are snapshots of the current tick and
//! may be stale by the next one.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{BlockId, KindTag};

/// Landing gear lock status as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LockState {
    /// Magnetically attached to a surface
    Locked,
    /// Free, nothing lockable in range
    Unlocked,
    /// A lockable surface is in range but the gear has not engaged
    ReadyToLock,
}

impl LockState {
    /// The literal the host prints into the block's detail text
    pub fn detail_label(&self) -> &'static str {
        match self {
            LockState::Locked => "Locked",
            LockState::Unlocked => "Unlocked",
            LockState::ReadyToLock => "Ready To Lock",
        }
    }
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.detail_label())
    }
}

/// Kind-specific live state carried inside a block record
///
/// The variant is fixed when the block is created from host type
/// information; actions and ticks mutate the fields, never the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum KindState {
    /// No kind-specific state
    Generic,
    /// Linear piston; limits and position in meters, velocity in m/s
    Piston {
        min_limit: f32,
        max_limit: f32,
        position: f32,
        velocity: f32,
    },
    /// Proximity sensor; `active` is raised by the host while something is in range
    Sensor { active: bool },
    /// Magnetic landing gear
    LandingGear { lock: LockState },
    /// Rotor or hinge stator; limits in radians (infinite means unlimited),
    /// current angle in degrees, velocity in rpm
    Motor {
        lower_limit_rad: f32,
        upper_limit_rad: f32,
        angle_deg: f32,
        velocity_rpm: f32,
    },
    /// Light fixture
    Light,
}

impl KindState {
    /// Tag matching this state's variant
    pub fn tag(&self) -> KindTag {
        match self {
            KindState::Generic => KindTag::Generic,
            KindState::Piston { .. } => KindTag::Piston,
            KindState::Sensor { .. } => KindTag::Sensor,
            KindState::LandingGear { .. } => KindTag::LandingGear,
            KindState::Motor { .. } => KindTag::Motor,
            KindState::Light => KindTag::Light,
        }
    }
}

/// Host-side record backing one terminal block
#[derive(Debug, Clone)]
pub struct BlockState {
    /// Host-assigned identity
    pub(crate) id: BlockId,
    /// Custom name shown in the terminal; mutable block state like any other
    pub(crate) name: String,
    /// On/off switch
    pub(crate) enabled: bool,
    /// Built far enough to operate
    pub(crate) functional: bool,
    /// Ownership is being taken over by an attacker
    pub(crate) hacked: bool,
    /// Free-form status text the host regenerates every tick
    pub(crate) detail: String,
    /// Action names this block accepts
    pub(crate) actions: Vec<String>,
    /// Kind-specific state
    pub(crate) kind: KindState,
}

impl BlockState {
    /// Whether the block accepts the given action name
    pub(crate) fn accepts(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}

/// Cheap-clone shared handle to a block record
///
/// Discovery returns fresh `BlockRef`s every call; holding one across ticks
/// is allowed but its reads always reflect the host's current state.
/// Equality is identity: two handles are equal when they point at the same
/// underlying record.
#[derive(Clone)]
pub struct BlockRef {
    pub(crate) state: Arc<RwLock<BlockState>>,
}

impl BlockRef {
    pub(crate) fn new(state: BlockState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Host-assigned block id
    pub fn id(&self) -> BlockId {
        self.state.read().id
    }

    /// Current custom name
    pub fn name(&self) -> String {
        self.state.read().name.clone()
    }

    /// Rename the block
    pub fn set_name(&self, name: &str) {
        self.state.write().name = name.to_string();
    }

    /// Raw on/off switch state
    pub fn is_enabled(&self) -> bool {
        self.state.read().enabled
    }

    /// Enabled and functional at once
    pub fn is_working(&self) -> bool {
        let state = self.state.read();
        state.enabled && state.functional
    }

    /// Negation of [`is_working`](Self::is_working)
    pub fn is_not_working(&self) -> bool {
        !self.is_working()
    }

    /// Built far enough to operate, regardless of the on/off switch
    pub fn is_functional(&self) -> bool {
        self.state.read().functional
    }

    /// Negation of [`is_functional`](Self::is_functional)
    pub fn is_not_functional(&self) -> bool {
        !self.is_functional()
    }

    /// Whether an attacker is currently taking the block over
    pub fn is_being_hacked(&self) -> bool {
        self.state.read().hacked
    }

    /// Snapshot of the host-generated detail text
    pub fn detail_text(&self) -> String {
        self.state.read().detail.clone()
    }

    /// Sub-kind tag assigned at creation
    pub fn kind(&self) -> KindTag {
        self.state.read().kind.tag()
    }

    /// Check the sub-kind tag
    pub fn is_kind(&self, tag: KindTag) -> bool {
        self.kind() == tag
    }

    /// Action names this block accepts, in host order
    pub fn actions(&self) -> Vec<String> {
        self.state.read().actions.clone()
    }

    /// Snapshot of the kind-specific state
    pub(crate) fn kind_state(&self) -> KindState {
        self.state.read().kind.clone()
    }
}

impl PartialEq for BlockRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for BlockRef {}

impl std::fmt::Debug for BlockRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("BlockRef")
            .field("id", &state.id)
            .field("name", &state.name)
            .field("kind", &state.kind.tag())
            .finish()
    }
}
