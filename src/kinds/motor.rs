//! Motor (rotor and hinge stator) view
//!
//! Angular limits are typed host properties in radians; infinite limits mean
//! the motor spins freely. The current angle is only reported through the
//! detail text, as signed whole degrees, so limit checks compare degrees
//! against degrees with a slack far below one display step.

use std::ops::Deref;

use crate::core::block::{BlockRef, KindState};
use crate::core::{FacadeError, KindTag};
use crate::detail;

/// Slack when comparing a reported angle against a limit, in degrees
pub const ANGLE_EPSILON_DEG: f32 = 1e-3;

/// Typed view over a motor block
#[derive(Debug, Clone)]
pub struct Motor {
    block: BlockRef,
}

impl Motor {
    /// Narrow a handle into a motor view
    pub fn cast(block: &BlockRef) -> Result<Self, FacadeError> {
        super::check_kind(block, KindTag::Motor)?;
        Ok(Self {
            block: block.clone(),
        })
    }

    fn fields(&self) -> (f32, f32, f32) {
        match self.block.kind_state() {
            KindState::Motor {
                lower_limit_rad,
                upper_limit_rad,
                velocity_rpm,
                ..
            } => (lower_limit_rad, upper_limit_rad, velocity_rpm),
            _ => unreachable!("kind variant is fixed at creation"),
        }
    }

    /// Lower angular limit, in radians; negative infinity when unlimited
    pub fn lower_limit_rad(&self) -> f32 {
        self.fields().0
    }

    /// Upper angular limit, in radians; positive infinity when unlimited
    pub fn upper_limit_rad(&self) -> f32 {
        self.fields().1
    }

    /// Lower angular limit converted to degrees
    pub fn lower_limit_deg(&self) -> f32 {
        self.lower_limit_rad().to_degrees()
    }

    /// Upper angular limit converted to degrees
    pub fn upper_limit_deg(&self) -> f32 {
        self.upper_limit_rad().to_degrees()
    }

    /// Current rotation velocity, in revolutions per minute
    pub fn velocity_rpm(&self) -> f32 {
        self.fields().2
    }

    /// Angle reported in the detail text, in degrees
    ///
    /// `None` when the host has not printed a readable angle.
    pub fn angle(&self) -> Option<f32> {
        detail::motor_angle(&self.block.detail_text())
    }

    /// Whether the reported angle has reached the upper limit
    ///
    /// An unreadable angle is never at a limit, and an infinite limit is
    /// never reached.
    pub fn is_at_upper_limit(&self) -> bool {
        self.angle()
            .map_or(false, |angle| angle >= self.upper_limit_deg() - ANGLE_EPSILON_DEG)
    }

    /// Whether the reported angle has reached the lower limit
    pub fn is_at_lower_limit(&self) -> bool {
        self.angle()
            .map_or(false, |angle| angle <= self.lower_limit_deg() + ANGLE_EPSILON_DEG)
    }

    /// Underlying block handle
    pub fn block(&self) -> &BlockRef {
        &self.block
    }
}

impl Deref for Motor {
    type Target = BlockRef;

    fn deref(&self) -> &BlockRef {
        &self.block
    }
}
