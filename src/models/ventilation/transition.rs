//! Gradual expansion (diffuser) or contraction (confusor) between two sections.
//!
//! ```text
//! ζ = ζ_local + λ/(8·sin θ)·(1 − 1/n²)
//! ```
//!
//! where `θ` is the half-angle of the taper and `n ≥ 1` the ratio of the
//! larger to the smaller area. The local term is `3.2·tan(θ)^1.25·(1 − 1/n)²`
//! for an expansion. For a contraction the revised correlation uses a
//! polynomial in `n` and the taper angle, while the legacy worksheet drops it.
//!
//! The loss is referenced to the inlet velocity (revised) or to the outlet
//! velocity (legacy). Friction always uses the smaller hydraulic diameter.

mod factors;

use twine_core::Model;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, VolumeRate},
    length::meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    flow::{self, SectionFlow},
    geometry::{CrossSection, GeometryError},
    thermo::{AirState, capability::AirProperties},
};

use super::{
    CorrelationVersion, FittingError, FittingLoss,
    error::{non_negative, positive},
};

/// A tapered piece joining two sections, in flow order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionInput {
    pub flow: Constrained<VolumeRate, StrictlyPositive>,
    pub temperature: ThermodynamicTemperature,

    /// Upstream section.
    pub inlet: CrossSection,

    /// Downstream section.
    pub outlet: CrossSection,

    /// Length of the taper along the axis.
    pub length: Constrained<Length, StrictlyPositive>,

    pub roughness: Constrained<Length, NonNegative>,
    pub version: CorrelationVersion,
}

impl TransitionInput {
    /// Creates a transition input with the default 1 mm wall roughness and
    /// the revised correlation.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if the flow or length is not strictly positive.
    pub fn new(
        flow: VolumeRate,
        temperature: ThermodynamicTemperature,
        inlet: CrossSection,
        outlet: CrossSection,
        length: Length,
    ) -> Result<Self, FittingError> {
        Ok(Self {
            flow: positive("flow", flow)?,
            temperature,
            inlet,
            outlet,
            length: positive("length", length)?,
            roughness: flow::duct_roughness(),
            version: CorrelationVersion::default(),
        })
    }

    /// Selects the correlation version.
    #[must_use]
    pub fn with_version(self, version: CorrelationVersion) -> Self {
        Self { version, ..self }
    }

    /// Replaces the wall roughness.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if `roughness` is negative.
    pub fn with_roughness(self, roughness: Length) -> Result<Self, FittingError> {
        Ok(Self {
            roughness: non_negative("roughness", roughness)?,
            ..self
        })
    }
}

/// Computes the loss of a transition.
///
/// Sections of equal area lose nothing.
///
/// # Errors
///
/// - [`FittingError::Geometry`] if the areas differ but no dimension changes,
///   so the taper has no angle.
/// - [`FittingError::Property`] if the air model fails at the input temperature.
pub fn transition<A: AirProperties + ?Sized>(
    input: &TransitionInput,
    air: &A,
) -> Result<FittingLoss, FittingError> {
    let state = AirState::at(air, input.temperature)?;

    let (s1, s2) = (input.inlet.area(), input.outlet.area());
    let expanding = s2 >= s1;
    let n = if expanding {
        (s2 / s1).get::<ratio>()
    } else {
        (s1 / s2).get::<ratio>()
    };

    let reference_area = match input.version {
        CorrelationVersion::Revised => s1,
        CorrelationVersion::Legacy => s2,
    };
    let velocity = flow::velocity(input.flow.get(), reference_area);

    let d_h1 = input.inlet.hydraulic_diameter();
    let d_h2 = input.outlet.hydraulic_diameter();
    let d_h = if d_h1 < d_h2 { d_h1 } else { d_h2 };
    let regime = SectionFlow::new(velocity, d_h, input.roughness.get(), &state);

    if s1 == s2 {
        tracing::debug!("transition between equal areas, no loss");
        return Ok(FittingLoss::new(0.0, velocity, regime.dynamic_pressure));
    }

    let change = factors::largest_dimension_change(&input.inlet, &input.outlet);
    let theta = factors::half_angle(change, input.length.get());
    if theta <= 0.0 {
        return Err(GeometryError::DegenerateTransition.into());
    }

    let local = if expanding {
        factors::expansion(theta, n)
    } else {
        factors::contraction(theta, n, input.version)
    };
    let friction = factors::friction(regime.friction_factor, theta, n);
    let coefficient = local + friction;

    tracing::debug!(
        version = %input.version,
        expanding,
        area_ratio = n,
        half_angle_deg = theta.to_degrees(),
        hydraulic_diameter_m = d_h.get::<meter>(),
        velocity_m_per_s = velocity.get::<meter_per_second>(),
        reynolds = regime.reynolds,
        friction_factor = regime.friction_factor,
        local,
        friction,
        dynamic_pressure_pa = regime.dynamic_pressure.get::<pascal>(),
        "transition"
    );

    Ok(FittingLoss::new(
        coefficient,
        velocity,
        regime.dynamic_pressure,
    ))
}

/// [`Model`] adapter computing transition losses with a bound air model.
#[derive(Debug, Clone, Default)]
pub struct TransitionModel<A> {
    air: A,
}

impl<A: AirProperties> TransitionModel<A> {
    #[must_use]
    pub fn new(air: A) -> Self {
        Self { air }
    }
}

impl<A: AirProperties> Model for TransitionModel<A> {
    type Input = TransitionInput;
    type Output = FittingLoss;
    type Error = FittingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        transition(input, &self.air)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::millimeter, thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_hour,
    };

    use crate::support::thermo::model::Tabulated;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn round(diameter: f64) -> CrossSection {
        CrossSection::circular(m(diameter)).unwrap()
    }

    fn rect(height: f64, width: f64) -> CrossSection {
        CrossSection::rectangular(m(height), m(width)).unwrap()
    }

    fn short_round(inlet: f64, outlet: f64) -> TransitionInput {
        TransitionInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(300.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            round(inlet),
            round(outlet),
            m(0.078),
        )
        .unwrap()
        .with_roughness(Length::new::<millimeter>(1.5))
        .unwrap()
    }

    fn pressure_drop(input: &TransitionInput) -> f64 {
        transition(input, &Tabulated::default())
            .unwrap()
            .pressure_drop
            .get::<pascal>()
    }

    #[test]
    fn confusor() {
        let legacy = short_round(0.16, 0.125).with_version(CorrelationVersion::Legacy);
        assert_relative_eq!(pressure_drop(&legacy), 0.4, epsilon = 0.01);

        let revised = short_round(0.16, 0.125);
        assert_relative_eq!(pressure_drop(&revised), 0.534, epsilon = 0.005);
    }

    #[test]
    fn diffuser() {
        let legacy = short_round(0.125, 0.16).with_version(CorrelationVersion::Legacy);
        assert_relative_eq!(pressure_drop(&legacy), 0.986, epsilon = 0.005);

        let revised = short_round(0.125, 0.16);
        assert_relative_eq!(pressure_drop(&revised), 2.634, epsilon = 0.005);
    }

    #[test]
    fn square_diffuser_in_cold_air() {
        let input = TransitionInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(2000.0),
            ThermodynamicTemperature::new::<degree_celsius>(-25.0),
            rect(0.3, 0.3),
            rect(0.6, 0.6),
            m(0.22),
        )
        .unwrap();
        assert_relative_eq!(pressure_drop(&input), 30.41, epsilon = 0.05);
    }

    #[test]
    fn rectangle_to_circle() {
        let input = TransitionInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(1000.0),
            ThermodynamicTemperature::new::<degree_celsius>(20.0),
            rect(0.2, 0.3),
            round(0.315),
            m(0.3),
        )
        .unwrap();
        assert_relative_eq!(pressure_drop(&input), 0.380, epsilon = 0.005);
    }

    #[test]
    fn equal_areas_lose_nothing() {
        let input = short_round(0.16, 0.16);
        let loss = transition(&input, &Tabulated::default()).unwrap();
        assert_relative_eq!(loss.coefficient, 0.0);
        assert_relative_eq!(loss.pressure_drop.get::<pascal>(), 0.0);
    }

    #[test]
    fn rejects_zero_length() {
        let error = TransitionInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(300.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            round(0.16),
            round(0.125),
            m(0.0),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            FittingError::InvalidInput {
                quantity: "length",
                ..
            }
        ));
    }

    #[test]
    fn model_adapter_matches_function() {
        let input = short_round(0.16, 0.125);
        let model = TransitionModel::new(Tabulated::default());
        assert_eq!(
            model.call(&input).unwrap(),
            transition(&input, &Tabulated::default()).unwrap()
        );
    }
}
