//! Air property modeling at atmospheric pressure.
//!
//! Fitting correlations only need two properties of the conveyed air, its
//! density and its kinematic viscosity, both evaluated at the flow
//! temperature and standard atmospheric pressure. Models expose them through
//! the [`capability`] traits; [`AirState`] captures one evaluation so a
//! calculation queries the model once.

mod error;

pub mod capability;
pub mod fluid;
pub mod model;

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{MassDensity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::KinematicViscosity;

pub use error::{ExtrapolationError, PropertyError};

use capability::AirProperties;

/// Standard atmospheric pressure all air properties are evaluated at, in pascals.
pub const ATMOSPHERIC_PRESSURE_PA: f64 = 101_325.0;

/// Air properties at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    pub density: MassDensity,
    pub kinematic_viscosity: KinematicViscosity,
}

impl AirState {
    /// Evaluates `model` at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either property cannot be calculated.
    pub fn at<M: AirProperties + ?Sized>(
        model: &M,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        let state = Self {
            density: model.density(temperature)?,
            kinematic_viscosity: model.kinematic_viscosity(temperature)?,
        };
        tracing::trace!(
            temperature_c = temperature.get::<degree_celsius>(),
            density = state.density.get::<kilogram_per_cubic_meter>(),
            kinematic_viscosity = state.kinematic_viscosity.get::<square_meter_per_second>(),
            "air state"
        );
        Ok(state)
    }
}
