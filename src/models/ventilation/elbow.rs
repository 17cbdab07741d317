//! Loss in a smooth bend (elbow) of circular or rectangular section.
//!
//! After Idelchik, diagram 6-1:
//!
//! ```text
//! ζ = k_Δ·k_Re·A1·B1·C1 + 0.0175·α·λ·r0/d_h
//! ```
//!
//! where `A1` depends on the bend angle α (degrees), `B1` on the relative
//! radius `r0/b0`, and `C1` on the aspect ratio of a rectangular section. The
//! second term is the friction along the bend centreline.

mod factors;

use twine_core::Model;
use uom::si::{
    angle::degree,
    f64::{Angle, Length, ThermodynamicTemperature, VolumeRate},
    length::meter,
    pressure::pascal,
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    flow::{self, SectionFlow},
    geometry::{BendPlane, CrossSection, Orientation},
    thermo::{AirState, capability::AirProperties},
};

use super::{
    CorrelationVersion, FittingError, FittingLoss,
    error::{non_negative, positive},
};

/// A bend of given angle and centreline radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElbowInput {
    pub flow: Constrained<VolumeRate, StrictlyPositive>,
    pub temperature: ThermodynamicTemperature,
    pub section: CrossSection,

    /// Turning angle.
    pub angle: Constrained<Angle, StrictlyPositive>,

    /// Centreline radius `r0`.
    pub radius: Constrained<Length, StrictlyPositive>,

    /// Plane of turning, required for rectangular sections.
    pub orientation: Option<Orientation>,

    pub roughness: Constrained<Length, NonNegative>,
    pub version: CorrelationVersion,
}

impl ElbowInput {
    /// Creates a bend input with 1.5 mm roughness, no orientation and the
    /// revised correlation.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if the flow, angle or radius is
    /// not strictly positive.
    pub fn new(
        flow: VolumeRate,
        temperature: ThermodynamicTemperature,
        section: CrossSection,
        angle: Angle,
        radius: Length,
    ) -> Result<Self, FittingError> {
        Ok(Self {
            flow: positive("flow", flow)?,
            temperature,
            section,
            angle: positive("angle", angle)?,
            radius: positive("radius", radius)?,
            orientation: None,
            roughness: flow::bend_roughness(),
            version: CorrelationVersion::default(),
        })
    }

    /// Sets the plane of turning.
    #[must_use]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            ..self
        }
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

/// Computes the loss of a bend.
///
/// # Errors
///
/// - [`FittingError::Geometry`] if a rectangular section has no orientation.
/// - [`FittingError::Property`] if the air model fails at the input temperature.
pub fn elbow<A: AirProperties + ?Sized>(
    input: &ElbowInput,
    air: &A,
) -> Result<FittingLoss, FittingError> {
    let plane = BendPlane::resolve(&input.section, input.orientation)?;
    let state = AirState::at(air, input.temperature)?;

    let d_h = input.section.hydraulic_diameter();
    let velocity = flow::velocity(input.flow.get(), input.section.area());
    let regime = SectionFlow::new(velocity, d_h, input.roughness.get(), &state);

    let angle = input.angle.get().get::<degree>();
    let radius = input.radius.get();
    let relative_radius = (radius / plane.in_plane()).get::<ratio>();

    let (k_delta, k_re) = factors::corrections(regime.reynolds, input.version);
    let a1 = factors::angle_factor(angle);
    let b1 = factors::radius_factor(relative_radius);
    let c1 = factors::shape_factor(&plane);

    let local = k_delta * k_re * a1 * b1 * c1;
    let friction = 0.0175 * angle * regime.friction_factor * (radius / d_h).get::<ratio>();
    let coefficient = local + friction;

    tracing::debug!(
        version = %input.version,
        hydraulic_diameter_m = d_h.get::<meter>(),
        velocity_m_per_s = velocity.get::<meter_per_second>(),
        reynolds = regime.reynolds,
        friction_factor = regime.friction_factor,
        relative_radius,
        k_delta,
        k_re,
        a1,
        b1,
        c1,
        coefficient,
        dynamic_pressure_pa = regime.dynamic_pressure.get::<pascal>(),
        "elbow"
    );

    Ok(FittingLoss::new(
        coefficient,
        velocity,
        regime.dynamic_pressure,
    ))
}

/// [`Model`] adapter computing bend losses with a bound air model.
#[derive(Debug, Clone, Default)]
pub struct ElbowModel<A> {
    air: A,
}

impl<A: AirProperties> ElbowModel<A> {
    #[must_use]
    pub fn new(air: A) -> Self {
        Self { air }
    }
}

impl<A: AirProperties> Model for ElbowModel<A> {
    type Input = ElbowInput;
    type Output = FittingLoss;
    type Error = FittingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        elbow(input, &self.air)
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

    use crate::support::{geometry::GeometryError, thermo::model::Tabulated};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn round_bend() -> ElbowInput {
        ElbowInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(600.0),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            CrossSection::circular(m(0.16)).unwrap(),
            Angle::new::<degree>(90.0),
            m(0.185),
        )
        .unwrap()
        .with_roughness(Length::new::<millimeter>(1.0))
        .unwrap()
    }

    fn square_bend(height: f64, width: f64) -> ElbowInput {
        ElbowInput::new(
            VolumeRate::new::<cubic_meter_per_hour>(1000.0),
            ThermodynamicTemperature::new::<degree_celsius>(-25.0),
            CrossSection::rectangular(m(height), m(width)).unwrap(),
            Angle::new::<degree>(90.0),
            m(0.25),
        )
        .unwrap()
        .with_roughness(Length::new::<millimeter>(1.0))
        .unwrap()
    }

    fn pressure_drop(input: &ElbowInput) -> f64 {
        elbow(input, &Tabulated::default())
            .unwrap()
            .pressure_drop
            .get::<pascal>()
    }

    #[test]
    fn round_bend_revised() {
        assert_relative_eq!(pressure_drop(&round_bend()), 25.12, epsilon = 0.05);
    }

    #[test]
    fn round_bend_legacy() {
        let input = round_bend().with_version(CorrelationVersion::Legacy);
        assert_relative_eq!(pressure_drop(&input), 11.27, epsilon = 0.05);
    }

    #[test]
    fn square_bend_in_cold_air() {
        let input = square_bend(0.3, 0.3).with_orientation(Orientation::Horizontal);
        assert_relative_eq!(pressure_drop(&input), 6.195, epsilon = 0.05);

        let legacy = input.with_version(CorrelationVersion::Legacy);
        assert_relative_eq!(pressure_drop(&legacy), 2.45, epsilon = 0.05);

        let smooth = legacy
            .with_roughness(Length::new::<millimeter>(0.1))
            .unwrap();
        assert_relative_eq!(pressure_drop(&smooth), 2.372, epsilon = 0.01);
    }

    #[test]
    fn orientation_changes_rectangular_bends() {
        let horizontal = square_bend(0.3, 0.6).with_orientation(Orientation::Horizontal);
        let vertical = square_bend(0.3, 0.6).with_orientation(Orientation::Vertical);
        assert_relative_eq!(pressure_drop(&horizontal), 10.355, epsilon = 0.05);
        assert_relative_eq!(pressure_drop(&vertical), 1.557, epsilon = 0.05);
    }

    #[test]
    fn circular_bend_ignores_orientation() {
        let plain = pressure_drop(&round_bend());
        let oriented = pressure_drop(&round_bend().with_orientation(Orientation::Vertical));
        assert_relative_eq!(plain, oriented);
    }

    #[test]
    fn rectangular_bend_without_orientation_fails() {
        let error = elbow(&square_bend(0.3, 0.3), &Tabulated::default()).unwrap_err();
        assert_eq!(
            error,
            FittingError::Geometry(GeometryError::MissingOrientation)
        );
    }

    #[test]
    fn rejects_non_positive_angle_and_radius() {
        let section = CrossSection::circular(m(0.16)).unwrap();
        let flow = VolumeRate::new::<cubic_meter_per_hour>(600.0);
        let t = ThermodynamicTemperature::new::<degree_celsius>(0.0);

        assert!(ElbowInput::new(flow, t, section, Angle::new::<degree>(0.0), m(0.2)).is_err());
        assert!(ElbowInput::new(flow, t, section, Angle::new::<degree>(90.0), m(0.0)).is_err());
    }
}
