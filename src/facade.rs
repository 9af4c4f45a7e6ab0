//! Script-facing facade
//!
//! [`GridFacade`] is the one object a script constructs at startup and
//! threads through its tick handler. It wraps the host terminal system with
//! discovery wrappers, kind views pre-configured from [`FacadeConfig`], and
//! a debug sink that writes into a panel block's custom name.

use std::sync::Arc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::block::BlockRef;
use crate::core::{FacadeError, KindTag};
use crate::grid::GridTerminal;
use crate::kinds::{piston::DEFAULT_POSITION_TOLERANCE, LandingGear, Light, Motor, Piston, Sensor};

/// Facade configuration
///
/// Fields missing from a JSON document fall back to their defaults.
///
/// # Example
/// ```
/// use grid_facade::FacadeConfig;
///
/// let config = FacadeConfig::from_json(r#"{ "debug_panel": "LCD Log" }"#).unwrap();
/// config.validate().unwrap();
/// assert_eq!(config.debug_panel.as_deref(), Some("LCD Log"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Exact name of the block whose custom name receives debug output
    pub debug_panel: Option<String>,
    /// Piston limit-comparison tolerance in meters
    pub position_tolerance: f32,
}

impl FacadeConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Check the configuration for unusable values
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.position_tolerance > 0.0,
            "position_tolerance must be positive, got {}",
            self.position_tolerance
        );
        anyhow::ensure!(
            self.position_tolerance <= 0.5,
            "position_tolerance above half a meter swallows real travel, got {}",
            self.position_tolerance
        );
        if let Some(name) = &self.debug_panel {
            anyhow::ensure!(!name.trim().is_empty(), "debug_panel name is empty");
        }
        Ok(())
    }
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            debug_panel: None,
            position_tolerance: DEFAULT_POSITION_TOLERANCE,
        }
    }
}

/// Script-facing context object over a host grid
///
/// # Example
/// ```
/// use grid_facade::{BlockSliceExt, BlockSpec, GridFacade, KindTag, MemoryGrid};
///
/// let grid = MemoryGrid::new();
/// grid.add(BlockSpec::light("Hangar Light 1"));
/// grid.add(BlockSpec::light("Hangar Light 2").disabled());
///
/// let facade = GridFacade::new(grid);
/// let lights = facade.find_blocks_of_type(KindTag::Light);
/// if lights.any(|light| light.is_working()) {
///     lights.for_each(|light| {
///         light.turn_off().unwrap();
///     });
/// }
/// assert!(lights.all(|light| light.is_not_working()));
/// ```
#[derive(Clone)]
pub struct GridFacade {
    grid: Arc<dyn GridTerminal>,
    config: FacadeConfig,
    debug_panel: Option<BlockRef>,
}

impl GridFacade {
    /// Wrap a host grid with the default configuration
    pub fn new(grid: impl GridTerminal + 'static) -> Self {
        Self::with_config(grid, FacadeConfig::default())
    }

    /// Wrap a host grid
    ///
    /// The debug panel, when configured, is resolved here once by exact
    /// name; a panel that is missing surfaces as an error on the first
    /// [`debug`](Self::debug) call.
    pub fn with_config(grid: impl GridTerminal + 'static, config: FacadeConfig) -> Self {
        let grid: Arc<dyn GridTerminal> = Arc::new(grid);
        let debug_panel = config.debug_panel.as_ref().and_then(|name| {
            let panel = grid.block_with_name(name);
            match &panel {
                Some(block) => debug!("[GridFacade] debug panel '{}' resolved", block.name()),
                None => warn!("[GridFacade] debug panel '{}' not found on the grid", name),
            }
            panel
        });
        Self {
            grid,
            config,
            debug_panel,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    // ── Discovery ──────────────────────────────────────────────────────────

    /// Every terminal block on the grid, in host order
    pub fn blocks(&self) -> Vec<BlockRef> {
        self.grid.blocks()
    }

    /// Blocks whose name matches `name`, in host order
    ///
    /// Matching semantics are the host's own; the query is passed through
    /// verbatim.
    pub fn find_blocks_of_name(&self, name: &str) -> Vec<BlockRef> {
        let found = self.grid.search_blocks_of_name(name, None);
        debug!("[GridFacade] name query '{}' matched {} block(s)", name, found.len());
        found
    }

    /// Blocks whose name matches `name` and that satisfy `predicate`
    pub fn find_blocks_of_name_where<P>(&self, name: &str, predicate: P) -> Vec<BlockRef>
    where
        P: Fn(&BlockRef) -> bool,
    {
        self.grid.search_blocks_of_name(name, Some(&predicate))
    }

    /// Blocks of one sub-kind, in host order
    pub fn find_blocks_of_type(&self, kind: KindTag) -> Vec<BlockRef> {
        let found = self.grid.blocks_of_kind(kind, None);
        debug!("[GridFacade] type query {} matched {} block(s)", kind, found.len());
        found
    }

    /// Blocks of one sub-kind that satisfy `predicate`
    pub fn find_blocks_of_type_where<P>(&self, kind: KindTag, predicate: P) -> Vec<BlockRef>
    where
        P: Fn(&BlockRef) -> bool,
    {
        self.grid.blocks_of_kind(kind, Some(&predicate))
    }

    /// The block named exactly `name`, if any
    pub fn block_with_name(&self, name: &str) -> Option<BlockRef> {
        self.grid.block_with_name(name)
    }

    // ── Kind views ─────────────────────────────────────────────────────────

    /// Piston view honoring the configured position tolerance
    pub fn piston(&self, block: &BlockRef) -> Result<Piston, FacadeError> {
        Ok(Piston::cast(block)?.with_tolerance(self.config.position_tolerance))
    }

    /// Sensor view
    pub fn sensor(&self, block: &BlockRef) -> Result<Sensor, FacadeError> {
        Sensor::cast(block)
    }

    /// Landing gear view
    pub fn landing_gear(&self, block: &BlockRef) -> Result<LandingGear, FacadeError> {
        LandingGear::cast(block)
    }

    /// Motor view
    pub fn motor(&self, block: &BlockRef) -> Result<Motor, FacadeError> {
        Motor::cast(block)
    }

    /// Light view
    pub fn light(&self, block: &BlockRef) -> Result<Light, FacadeError> {
        Light::cast(block)
    }

    // ── Debug sink ─────────────────────────────────────────────────────────

    /// Append a line of debug output to the panel block's custom name
    ///
    /// The panel's name doubles as a rolling log that survives until the
    /// next [`debug_clear`](Self::debug_clear).
    pub fn debug(&self, text: &str) -> Result<(), FacadeError> {
        let panel = self
            .debug_panel
            .as_ref()
            .ok_or(FacadeError::MissingDebugPanel)?;
        let mut name = panel.name();
        name.push('\n');
        name.push_str(text);
        panel.set_name(&name);
        Ok(())
    }

    /// Reset the debug panel's name back to its configured base name
    ///
    /// Does nothing when no panel is resolvable.
    pub fn debug_clear(&self) {
        if let (Some(panel), Some(base)) = (&self.debug_panel, &self.config.debug_panel) {
            panel.set_name(base);
        }
    }
}
