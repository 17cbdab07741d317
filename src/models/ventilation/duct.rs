//! Friction loss in a straight duct.
//!
//! `ζ = λ·L/d_h`, with λ from the Altshul formula, and `Δp = ζ·ρv²/2`.

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
    geometry::CrossSection,
    thermo::{AirState, capability::AirProperties},
};

use super::{
    FittingError, FittingLoss,
    error::{non_negative, positive},
};

/// A straight run of duct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuctInput {
    pub flow: Constrained<VolumeRate, StrictlyPositive>,
    pub temperature: ThermodynamicTemperature,
    pub section: CrossSection,
    pub length: Constrained<Length, StrictlyPositive>,
    pub roughness: Constrained<Length, NonNegative>,
}

impl DuctInput {
    /// Creates a duct input with the default 1 mm wall roughness.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if the flow or length is not strictly positive.
    pub fn new(
        flow: VolumeRate,
        temperature: ThermodynamicTemperature,
        section: CrossSection,
        length: Length,
    ) -> Result<Self, FittingError> {
        Ok(Self {
            flow: positive("flow", flow)?,
            temperature,
            section,
            length: positive("length", length)?,
            roughness: flow::duct_roughness(),
        })
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

/// Computes the friction loss of a straight duct.
///
/// # Errors
///
/// Returns [`FittingError::Property`] if the air model fails at the input temperature.
pub fn duct<A: AirProperties + ?Sized>(
    input: &DuctInput,
    air: &A,
) -> Result<FittingLoss, FittingError> {
    let state = AirState::at(air, input.temperature)?;

    let d_h = input.section.hydraulic_diameter();
    let velocity = flow::velocity(input.flow.get(), input.section.area());
    let regime = SectionFlow::new(velocity, d_h, input.roughness.get(), &state);

    let coefficient = regime.friction_factor * (input.length.get() / d_h).get::<ratio>();

    tracing::debug!(
        hydraulic_diameter_m = d_h.get::<meter>(),
        velocity_m_per_s = velocity.get::<meter_per_second>(),
        reynolds = regime.reynolds,
        friction_factor = regime.friction_factor,
        coefficient,
        dynamic_pressure_pa = regime.dynamic_pressure.get::<pascal>(),
        "duct"
    );

    Ok(FittingLoss::new(
        coefficient,
        velocity,
        regime.dynamic_pressure,
    ))
}

/// [`Model`] adapter computing straight-duct losses with a bound air model.
#[derive(Debug, Clone, Default)]
pub struct DuctModel<A> {
    air: A,
}

impl<A: AirProperties> DuctModel<A> {
    #[must_use]
    pub fn new(air: A) -> Self {
        Self { air }
    }
}

impl<A: AirProperties> Model for DuctModel<A> {
    type Input = DuctInput;
    type Output = FittingLoss;
    type Error = FittingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        duct(input, &self.air)
    }
}
