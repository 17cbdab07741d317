//! Capability traits used to query air properties.
//!
//! Every property is a function of temperature alone; pressure is fixed at
//! [`ATMOSPHERIC_PRESSURE_PA`](super::ATMOSPHERIC_PRESSURE_PA).

mod base;
mod properties;

pub use base::ThermoModel;
pub use properties::{AirProperties, HasDensity, HasKinematicViscosity};
