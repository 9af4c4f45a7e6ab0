//! In-memory grid host
//!
//! [`MemoryGrid`] is a self-contained host model: it owns the block records,
//! regenerates every block's detail text, applies simple kinematics per
//! tick, and hands out handles through [`GridTerminal`]. Tests and
//! benchmarks run whole script scenarios against it without a live game
//! host.
//!
//! Host behavior modeled here:
//! - name search is case-insensitive substring containment
//! - working pistons travel `velocity * dt` meters and stop at their limits
//! - working motors turn `rpm * 6 * dt` degrees and stop at finite limits
//! - detail text is rewritten from state on every tick (and at add time)

use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::{BlockPredicate, GridTerminal};
use crate::core::action::default_actions;
use crate::core::block::{BlockRef, BlockState, KindState, LockState};
use crate::core::{BlockId, KindTag};

// ---------------------------------------------------------------------------
// Block specs
// ---------------------------------------------------------------------------

/// Declarative description of a block to place on a grid
///
/// # Example
/// ```
/// use grid_facade::{BlockSpec, MemoryGrid};
///
/// let grid = MemoryGrid::new();
/// let piston = grid.add(BlockSpec::piston("Piston 1").with_limits(0.0, 5.0));
/// assert_eq!(piston.name(), "Piston 1");
/// ```
#[derive(Debug, Clone)]
pub struct BlockSpec {
    name: String,
    enabled: bool,
    functional: bool,
    hacked: bool,
    kind: KindState,
}

impl BlockSpec {
    fn new(name: &str, kind: KindState) -> Self {
        Self {
            name: name.to_string(),
            enabled: true,
            functional: true,
            hacked: false,
            kind,
        }
    }

    /// Plain terminal block
    pub fn generic(name: &str) -> Self {
        Self::new(name, KindState::Generic)
    }

    /// Piston with default limits 0..10 m and +0.5 m/s velocity
    pub fn piston(name: &str) -> Self {
        Self::new(
            name,
            KindState::Piston {
                min_limit: 0.0,
                max_limit: 10.0,
                position: 0.0,
                velocity: 0.5,
            },
        )
    }

    /// Sensor with a clear detection field
    pub fn sensor(name: &str) -> Self {
        Self::new(name, KindState::Sensor { active: false })
    }

    /// Landing gear, unlocked
    pub fn landing_gear(name: &str) -> Self {
        Self::new(
            name,
            KindState::LandingGear {
                lock: LockState::Unlocked,
            },
        )
    }

    /// Motor with unlimited rotation and +1 rpm velocity
    pub fn motor(name: &str) -> Self {
        Self::new(
            name,
            KindState::Motor {
                lower_limit_rad: f32::NEG_INFINITY,
                upper_limit_rad: f32::INFINITY,
                angle_deg: 0.0,
                velocity_rpm: 1.0,
            },
        )
    }

    /// Light fixture
    pub fn light(name: &str) -> Self {
        Self::new(name, KindState::Light)
    }

    /// Start switched off
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Start below the functional build threshold
    pub fn damaged(mut self) -> Self {
        self.functional = false;
        self
    }

    /// Start with an attacker already working on the block
    pub fn hacked(mut self) -> Self {
        self.hacked = true;
        self
    }

    /// Piston travel limits in meters; ignored for other kinds
    pub fn with_limits(mut self, min: f32, max: f32) -> Self {
        if let KindState::Piston {
            min_limit,
            max_limit,
            ..
        } = &mut self.kind
        {
            *min_limit = min;
            *max_limit = max;
        }
        self
    }

    /// Piston velocity in m/s, or motor velocity in rpm; ignored otherwise
    pub fn with_velocity(mut self, value: f32) -> Self {
        match &mut self.kind {
            KindState::Piston { velocity, .. } => *velocity = value,
            KindState::Motor { velocity_rpm, .. } => *velocity_rpm = value,
            _ => {}
        }
        self
    }

    /// Piston starting position in meters; ignored for other kinds
    pub fn at_position(mut self, meters: f32) -> Self {
        if let KindState::Piston { position, .. } = &mut self.kind {
            *position = meters;
        }
        self
    }

    /// Motor angular limits in radians; ignored for other kinds
    pub fn with_angle_limits_rad(mut self, lower: f32, upper: f32) -> Self {
        if let KindState::Motor {
            lower_limit_rad,
            upper_limit_rad,
            ..
        } = &mut self.kind
        {
            *lower_limit_rad = lower;
            *upper_limit_rad = upper;
        }
        self
    }

    /// Motor starting angle in degrees; ignored for other kinds
    pub fn at_angle(mut self, degrees: f32) -> Self {
        if let KindState::Motor { angle_deg, .. } = &mut self.kind {
            *angle_deg = degrees;
        }
        self
    }

    /// Sensor starting with something in the detection field; ignored otherwise
    pub fn active(mut self) -> Self {
        if let KindState::Sensor { active } = &mut self.kind {
            *active = true;
        }
        self
    }

    /// Landing gear starting locked; ignored for other kinds
    pub fn locked(self) -> Self {
        self.with_lock(LockState::Locked)
    }

    /// Landing gear starting unlocked; ignored for other kinds
    pub fn unlocked(self) -> Self {
        self.with_lock(LockState::Unlocked)
    }

    /// Landing gear starting with a surface in range; ignored for other kinds
    pub fn ready_to_lock(self) -> Self {
        self.with_lock(LockState::ReadyToLock)
    }

    fn with_lock(mut self, state: LockState) -> Self {
        if let KindState::LandingGear { lock } = &mut self.kind {
            *lock = state;
        }
        self
    }

    /// Materialize the spec into a standalone block record
    ///
    /// Hosts other than [`MemoryGrid`] can use this to mint handles under
    /// their own id scheme.
    pub fn build(self, id: BlockId) -> BlockRef {
        let actions = default_actions(self.kind.tag());
        let mut state = BlockState {
            id,
            name: self.name,
            enabled: self.enabled,
            functional: self.functional,
            hacked: self.hacked,
            detail: String::new(),
            actions,
            kind: self.kind,
        };
        state.detail = render_detail(&state);
        BlockRef::new(state)
    }
}

// ---------------------------------------------------------------------------
// Detail text
// ---------------------------------------------------------------------------

/// Render the host status text for a record
fn render_detail(state: &BlockState) -> String {
    match &state.kind {
        KindState::Generic => "Type: Terminal Block".to_string(),
        KindState::Piston { position, .. } => format!(
            "Type: Piston\nMax Required Input: 200 W\nCurrent position: {:.1}m",
            position
        ),
        KindState::Sensor { active } => format!(
            "Type: Sensor\nField: {}",
            if *active { "occupied" } else { "clear" }
        ),
        KindState::LandingGear { lock } => format!(
            "Type: Landing Gear\nLock state: {}",
            lock.detail_label()
        ),
        KindState::Motor { angle_deg, .. } => format!(
            "Type: Rotor\nMax Required Input: 2 W\nCurrent angle: {}°",
            angle_deg.round() as i32
        ),
        KindState::Light => "Type: Light\nMax Required Input: 2 W".to_string(),
    }
}

// ---------------------------------------------------------------------------
// MemoryGrid
// ---------------------------------------------------------------------------

struct GridInner {
    blocks: Vec<BlockRef>,
    next_id: u64,
}

/// In-memory host grid
///
/// Cloning shares the same underlying grid.
#[derive(Clone)]
pub struct MemoryGrid {
    inner: Arc<RwLock<GridInner>>,
}

impl MemoryGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GridInner {
                blocks: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Place a block on the grid and hand back its handle
    pub fn add(&self, spec: BlockSpec) -> BlockRef {
        let mut inner = self.inner.write();
        let id = BlockId(inner.next_id);
        inner.next_id += 1;
        let block = spec.build(id);
        debug!("[MemoryGrid] added {} '{}' ({})", id, block.name(), block.kind());
        inner.blocks.push(block.clone());
        block
    }

    /// Remove a block from the grid
    ///
    /// Existing handles stay readable and keep reporting the block's last
    /// state; discovery simply stops returning them.
    pub fn remove(&self, block: &BlockRef) {
        self.inner.write().blocks.retain(|candidate| candidate != block);
    }

    /// Number of blocks on the grid
    pub fn len(&self) -> usize {
        self.inner.read().blocks.len()
    }

    /// Whether the grid holds no blocks
    pub fn is_empty(&self) -> bool {
        self.inner.read().blocks.is_empty()
    }

    /// Host-side damage model: set whether the block is built enough to run
    pub fn set_functional(&self, block: &BlockRef, functional: bool) {
        block.state.write().functional = functional;
    }

    /// Host-side ownership model: set whether an attacker is on the block
    pub fn set_hacked(&self, block: &BlockRef, hacked: bool) {
        block.state.write().hacked = hacked;
    }

    /// Host-side detection model: set whether the sensor field is occupied
    pub fn set_sensor_active(&self, block: &BlockRef, active: bool) {
        let mut state = block.state.write();
        if let KindState::Sensor { active: field } = &mut state.kind {
            *field = active;
        }
        let detail = render_detail(&state);
        state.detail = detail;
    }

    /// Host-side proximity model: set a landing gear's lock status
    pub fn set_lock_state(&self, block: &BlockRef, lock: LockState) {
        let mut state = block.state.write();
        if let KindState::LandingGear { lock: current } = &mut state.kind {
            *current = lock;
        }
        let detail = render_detail(&state);
        state.detail = detail;
    }

    /// Advance the simulation clock by `seconds`
    ///
    /// Only working blocks move. Every block's detail text is rewritten
    /// afterwards, so position and angle reports lag mutations by at most
    /// one tick.
    pub fn tick(&self, seconds: f32) {
        let inner = self.inner.read();
        for block in &inner.blocks {
            let mut state = block.state.write();
            let working = state.enabled && state.functional;
            match &mut state.kind {
                KindState::Piston {
                    min_limit,
                    max_limit,
                    position,
                    velocity,
                } if working => {
                    *position = (*position + *velocity * seconds)
                        .max(*min_limit)
                        .min(*max_limit);
                }
                KindState::Motor {
                    lower_limit_rad,
                    upper_limit_rad,
                    angle_deg,
                    velocity_rpm,
                } if working => {
                    // 1 rpm = 6 degrees per second
                    let mut next = *angle_deg + *velocity_rpm * 6.0 * seconds;
                    if lower_limit_rad.is_finite() {
                        next = next.max(lower_limit_rad.to_degrees());
                    }
                    if upper_limit_rad.is_finite() {
                        next = next.min(upper_limit_rad.to_degrees());
                    }
                    *angle_deg = next;
                }
                _ => {}
            }
            let detail = render_detail(&state);
            state.detail = detail;
        }
    }
}

impl Default for MemoryGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GridTerminal for MemoryGrid {
    fn blocks(&self) -> Vec<BlockRef> {
        self.inner.read().blocks.clone()
    }

    fn search_blocks_of_name(
        &self,
        name: &str,
        predicate: Option<&BlockPredicate>,
    ) -> Vec<BlockRef> {
        let needle = name.to_lowercase();
        self.inner
            .read()
            .blocks
            .iter()
            .filter(|block| {
                block.name().to_lowercase().contains(&needle)
                    && predicate.map_or(true, |keep| keep(block))
            })
            .cloned()
            .collect()
    }

    fn blocks_of_kind(&self, kind: KindTag, predicate: Option<&BlockPredicate>) -> Vec<BlockRef> {
        self.inner
            .read()
            .blocks
            .iter()
            .filter(|block| block.kind() == kind && predicate.map_or(true, |keep| keep(block)))
            .cloned()
            .collect()
    }

    fn block_with_name(&self, name: &str) -> Option<BlockRef> {
        self.inner
            .read()
            .blocks
            .iter()
            .find(|block| block.name() == name)
            .cloned()
    }
}
