//! Sensor view

use std::ops::Deref;

use crate::core::block::{BlockRef, KindState};
use crate::core::{FacadeError, KindTag};

/// Typed view over a proximity sensor block
#[derive(Debug, Clone)]
pub struct Sensor {
    block: BlockRef,
}

impl Sensor {
    /// Narrow a handle into a sensor view
    pub fn cast(block: &BlockRef) -> Result<Self, FacadeError> {
        super::check_kind(block, KindTag::Sensor)?;
        Ok(Self {
            block: block.clone(),
        })
    }

    /// Whether something is currently inside the detection field
    pub fn is_active(&self) -> bool {
        matches!(
            self.block.kind_state(),
            KindState::Sensor { active: true }
        )
    }

    /// Underlying block handle
    pub fn block(&self) -> &BlockRef {
        &self.block
    }
}

impl Deref for Sensor {
    type Target = BlockRef;

    fn deref(&self) -> &BlockRef {
        &self.block
    }
}
