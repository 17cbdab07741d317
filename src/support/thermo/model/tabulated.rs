//! Handbook air model.
//!
//! Density comes from the ideal gas law at atmospheric pressure with the
//! handbook molar mass and gas constant. Kinematic viscosity is interpolated
//! from a [`ViscosityTable`], by default the Idelchik table for dry air.

mod idelchik;
mod viscosity_table;

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    pressure::pascal,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    thermo::{
        ATMOSPHERIC_PRESSURE_PA, PropertyError,
        capability::{HasDensity, HasKinematicViscosity, ThermoModel},
        fluid::Air,
    },
    units::KinematicViscosity,
};

use super::ideal_gas_eos;

pub use viscosity_table::{ViscosityTable, ViscosityTableError};

/// Tabulated handbook air model.
///
/// # Example
///
/// ```
/// use duct_resistance::support::thermo::{capability::HasKinematicViscosity, model::Tabulated};
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second, f64::ThermodynamicTemperature,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let air = Tabulated::default();
/// let nu = air
///     .kinematic_viscosity(ThermodynamicTemperature::new::<degree_celsius>(20.0))
///     .unwrap();
/// assert!((nu.get::<square_meter_per_second>() - 15.06e-6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tabulated {
    viscosity: ViscosityTable,
}

impl Tabulated {
    /// Creates a model that interpolates viscosity from `viscosity`.
    #[must_use]
    pub fn new(viscosity: ViscosityTable) -> Self {
        Self { viscosity }
    }

    /// The viscosity table in use.
    #[must_use]
    pub fn table(&self) -> &ViscosityTable {
        &self.viscosity
    }
}

impl Default for Tabulated {
    fn default() -> Self {
        Self::new(ViscosityTable::idelchik())
    }
}

impl ThermoModel for Tabulated {
    type Fluid = Air;
}

impl HasDensity for Tabulated {
    fn density(&self, temperature: ThermodynamicTemperature) -> Result<MassDensity, PropertyError> {
        let rho = ideal_gas_eos::density(
            temperature,
            Pressure::new::<pascal>(ATMOSPHERIC_PRESSURE_PA),
            Air::molar_mass(),
        );
        if rho.value.is_finite() && rho.value > 0.0 {
            Ok(rho)
        } else {
            Err(PropertyError::OutOfDomain {
                context: format!(
                    "no ideal-gas density at {} °C",
                    temperature.get::<degree_celsius>()
                ),
            })
        }
    }
}

impl HasKinematicViscosity for Tabulated {
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<KinematicViscosity, PropertyError> {
        let celsius = temperature.get::<degree_celsius>();
        if !celsius.is_finite() {
            return Err(PropertyError::InvalidState {
                context: format!("temperature {celsius} °C is not finite"),
            });
        }
        let nu = self.viscosity.lookup(celsius)?;
        Ok(KinematicViscosity::new::<square_meter_per_second>(nu))
    }
}
