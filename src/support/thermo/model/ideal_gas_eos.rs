//! Ideal gas equation of state, molar form: `p·M = ρ·R·T`.

use uom::si::{
    f64::{MassDensity, MolarMass, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

/// Universal gas constant as used by the handbook tables, J/(mol·K).
pub(crate) const UNIVERSAL_GAS_CONSTANT: f64 = 8.314;

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    molar_mass: MolarMass,
) -> MassDensity {
    let rho = pressure.get::<pascal>() * molar_mass.get::<kilogram_per_mole>()
        / (UNIVERSAL_GAS_CONSTANT * temperature.get::<kelvin>());
    MassDensity::new::<kilogram_per_cubic_meter>(rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::support::thermo::{ATMOSPHERIC_PRESSURE_PA, fluid::Air};

    fn atmospheric() -> Pressure {
        Pressure::new::<pascal>(ATMOSPHERIC_PRESSURE_PA)
    }

    #[test]
    fn air_at_freezing() {
        let rho = density(
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            atmospheric(),
            Air::molar_mass(),
        );
        assert_relative_eq!(rho.get::<kilogram_per_cubic_meter>(), 1.293_02, epsilon = 1e-5);
    }

    #[test]
    fn density_is_inverse_in_absolute_temperature() {
        let cold = density(
            ThermodynamicTemperature::new::<kelvin>(250.0),
            atmospheric(),
            Air::molar_mass(),
        );
        let hot = density(
            ThermodynamicTemperature::new::<kelvin>(500.0),
            atmospheric(),
            Air::molar_mass(),
        );
        assert_relative_eq!(
            cold.get::<kilogram_per_cubic_meter>(),
            2.0 * hot.get::<kilogram_per_cubic_meter>(),
            epsilon = 1e-12
        );
    }
}
