//! Sub-kind views and safe casts
//!
//! Discovery hands back plain [`BlockRef`]s. To read kind-specific
//! configuration or status a script narrows the handle into a typed view,
//! either through the view's `cast` constructor or the [`KindCasts`]
//! extension methods. Narrowing against the wrong sub-kind fails with
//! [`FacadeError::WrongKind`] naming the block and the expected kind; it
//! never panics and never returns a half-valid view.

pub mod landing_gear;
pub mod light;
pub mod motor;
pub mod piston;
pub mod sensor;

pub use landing_gear::LandingGear;
pub use light::Light;
pub use motor::Motor;
pub use piston::Piston;
pub use sensor::Sensor;

use crate::core::block::BlockRef;
use crate::core::{FacadeError, KindTag};

pub(crate) fn check_kind(block: &BlockRef, expected: KindTag) -> Result<(), FacadeError> {
    if block.kind() == expected {
        Ok(())
    } else {
        Err(FacadeError::WrongKind {
            block: block.name(),
            expected,
        })
    }
}

/// Narrowing casts from a plain handle into typed views
pub trait KindCasts {
    /// View the block as a piston
    fn as_piston(&self) -> Result<Piston, FacadeError>;
    /// View the block as a sensor
    fn as_sensor(&self) -> Result<Sensor, FacadeError>;
    /// View the block as a landing gear
    fn as_landing_gear(&self) -> Result<LandingGear, FacadeError>;
    /// View the block as a motor
    fn as_motor(&self) -> Result<Motor, FacadeError>;
    /// View the block as a light
    fn as_light(&self) -> Result<Light, FacadeError>;
}

impl KindCasts for BlockRef {
    fn as_piston(&self) -> Result<Piston, FacadeError> {
        Piston::cast(self)
    }

    fn as_sensor(&self) -> Result<Sensor, FacadeError> {
        Sensor::cast(self)
    }

    fn as_landing_gear(&self) -> Result<LandingGear, FacadeError> {
        LandingGear::cast(self)
    }

    fn as_motor(&self) -> Result<Motor, FacadeError> {
        Motor::cast(self)
    }

    fn as_light(&self) -> Result<Light, FacadeError> {
        Light::cast(self)
    }
}
