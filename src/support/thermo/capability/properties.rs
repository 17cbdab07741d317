use uom::si::f64::{MassDensity, ThermodynamicTemperature};

use crate::support::{
    thermo::{PropertyError, fluid::Air},
    units::KinematicViscosity,
};

use super::ThermoModel;

pub trait HasDensity: ThermoModel {
    /// Returns the density at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, temperature: ThermodynamicTemperature) -> Result<MassDensity, PropertyError>;
}

pub trait HasKinematicViscosity: ThermoModel {
    /// Returns the kinematic viscosity at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the viscosity cannot be calculated.
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError>;
}

impl<M: HasDensity + ?Sized> HasDensity for &M {
    fn density(&self, temperature: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        (**self).density(temperature)
    }
}

impl<M: HasKinematicViscosity + ?Sized> HasKinematicViscosity for &M {
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        (**self).kinematic_viscosity(temperature)
    }
}

/// Everything a fitting model needs to know about the conveyed air.
///
/// Implemented automatically for any air model with both capabilities.
pub trait AirProperties: HasDensity + HasKinematicViscosity + ThermoModel<Fluid = Air> {}

impl<M> AirProperties for M where
    M: HasDensity + HasKinematicViscosity + ThermoModel<Fluid = Air> + ?Sized
{
}
