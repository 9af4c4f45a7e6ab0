//! Light view
//!
//! Lights carry no kind-specific state the facade can read; the view exists
//! so scripts narrow handles uniformly across kinds.

use std::ops::Deref;

use crate::core::block::BlockRef;
use crate::core::{FacadeError, KindTag};

/// Typed view over a light block
#[derive(Debug, Clone)]
pub struct Light {
    block: BlockRef,
}

impl Light {
    /// Narrow a handle into a light view
    pub fn cast(block: &BlockRef) -> Result<Self, FacadeError> {
        super::check_kind(block, KindTag::Light)?;
        Ok(Self {
            block: block.clone(),
        })
    }

    /// Whether the light is actually shining
    pub fn is_on(&self) -> bool {
        self.block.is_working()
    }

    /// Underlying block handle
    pub fn block(&self) -> &BlockRef {
        &self.block
    }
}

impl Deref for Light {
    type Target = BlockRef;

    fn deref(&self) -> &BlockRef {
        &self.block
    }
}
