//! Flow primitives shared by every fitting correlation.
//!
//! All loss calculations reduce to the same chain: velocity from flow and
//! area, a Reynolds number, the Altshul friction factor and the dynamic
//! pressure that loss coefficients are referenced to.

use uom::si::{
    f64::{Area, Length, MassDensity, Pressure, Velocity, VolumeRate},
    length::millimeter,
    ratio::ratio,
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    thermo::AirState,
    units::KinematicViscosity,
};

/// Equivalent roughness assumed for straight ducts and transitions, in millimetres.
pub const DUCT_ROUGHNESS_MM: f64 = 1.0;

/// Equivalent roughness assumed for bends, in millimetres.
pub const BEND_ROUGHNESS_MM: f64 = 1.5;

/// Default wall roughness for straight ducts and transitions.
#[must_use]
pub fn duct_roughness() -> Constrained<Length, NonNegative> {
    Constrained::new_unchecked(Length::new::<millimeter>(DUCT_ROUGHNESS_MM))
}

/// Default wall roughness for bends.
#[must_use]
pub fn bend_roughness() -> Constrained<Length, NonNegative> {
    Constrained::new_unchecked(Length::new::<millimeter>(BEND_ROUGHNESS_MM))
}

/// Mean velocity of `flow` through `area`.
#[must_use]
pub fn velocity(flow: VolumeRate, area: Area) -> Velocity {
    flow / area
}

/// Reynolds number `v·d_h/ν`.
#[must_use]
pub fn reynolds_number(
    velocity: Velocity,
    hydraulic_diameter: Length,
    kinematic_viscosity: KinematicViscosity,
) -> f64 {
    (velocity * hydraulic_diameter / kinematic_viscosity).get::<ratio>()
}

/// Darcy friction factor from the Altshul formula,
/// `λ = 0.11·(Δ/d_h + 68/Re)^0.25`.
#[must_use]
pub fn friction_factor(roughness: Length, hydraulic_diameter: Length, reynolds: f64) -> f64 {
    let relative_roughness = (roughness / hydraulic_diameter).get::<ratio>();
    0.11 * (relative_roughness + 68.0 / reynolds).powf(0.25)
}

/// Dynamic pressure `ρ·v²/2`.
#[must_use]
pub fn dynamic_pressure(velocity: Velocity, density: MassDensity) -> Pressure {
    density * velocity * velocity * 0.5
}

/// The flow regime at a reference section of a fitting.
///
/// Bundles the quantities a loss coefficient is evaluated with and then
/// scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFlow {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub dynamic_pressure: Pressure,
}

impl SectionFlow {
    /// Evaluates the flow regime for a velocity, characteristic diameter and wall roughness.
    #[must_use]
    pub fn new(
        velocity: Velocity,
        hydraulic_diameter: Length,
        roughness: Length,
        air: &AirState,
    ) -> Self {
        let reynolds = reynolds_number(velocity, hydraulic_diameter, air.kinematic_viscosity);
        Self {
            velocity,
            reynolds,
            friction_factor: friction_factor(roughness, hydraulic_diameter, reynolds),
            dynamic_pressure: dynamic_pressure(velocity, air.density),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        diffusion_coefficient::square_meter_per_second,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        pressure::pascal,
        velocity::meter_per_second,
        volume_rate::cubic_meter_per_hour,
    };

    fn air_at_zero_celsius() -> AirState {
        AirState {
            density: MassDensity::new::<kilogram_per_cubic_meter>(1.293_02),
            kinematic_viscosity: KinematicViscosity::new::<square_meter_per_second>(13.28e-6),
        }
    }

    #[test]
    fn velocity_from_hourly_flow() {
        let v = velocity(
            VolumeRate::new::<cubic_meter_per_hour>(3600.0),
            Area::new::<square_meter>(0.5),
        );
        assert_relative_eq!(v.get::<meter_per_second>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn round_duct_regime() {
        let air = air_at_zero_celsius();
        let v = Velocity::new::<meter_per_second>(8.289_79);
        let d = Length::new::<meter>(0.16);
        let flow = SectionFlow::new(v, d, Length::new::<millimeter>(1.0), &air);

        assert_relative_eq!(flow.reynolds, 99_877.0, max_relative = 1e-3);
        assert_relative_eq!(flow.friction_factor, 0.031_74, epsilon = 1e-4);
        assert_relative_eq!(
            flow.dynamic_pressure.get::<pascal>(),
            44.43,
            epsilon = 0.01
        );
    }

    #[test]
    fn smooth_wall_friction_depends_on_reynolds_only() {
        let d = Length::new::<meter>(0.2);
        let smooth = friction_factor(Length::new::<meter>(0.0), d, 1.0e5);
        assert_relative_eq!(smooth, 0.11 * (68.0e-5_f64).powf(0.25), epsilon = 1e-12);
        assert!(friction_factor(Length::new::<millimeter>(1.0), d, 1.0e5) > smooth);
    }

    #[test]
    fn default_roughness_values() {
        assert_relative_eq!(duct_roughness().get().get::<millimeter>(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(bend_roughness().get().get::<millimeter>(), 1.5, epsilon = 1e-12);
    }
}
