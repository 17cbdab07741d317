//! Tee junction: a combined port, a straight-through port and one branch.
//!
//! Exactly two of the three port flows are given; the third is solved from
//! volume conservation. Losses on both paths are referenced to the dynamic
//! pressure at the combined port.

use twine_core::Model;
use uom::{
    ConstZero,
    si::{
        f64::{Angle, ThermodynamicTemperature, VolumeRate},
        pressure::pascal,
    },
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    thermo::capability::HasDensity,
};

use super::{
    FittingError, FittingLoss, FlowDirection, JunctionPort,
    error::positive,
    junction::{self, SidePath},
};

/// A tee with its three ports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeeInput {
    pub temperature: ThermodynamicTemperature,
    pub direction: FlowDirection,

    /// Angle between the branch and the through port.
    pub angle: Constrained<Angle, StrictlyPositive>,

    pub combined: JunctionPort,
    pub branch: JunctionPort,
    pub through: JunctionPort,
}

impl TeeInput {
    /// Creates a tee input.
    ///
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if `angle` is not strictly positive.
    pub fn new(
        temperature: ThermodynamicTemperature,
        direction: FlowDirection,
        angle: Angle,
        combined: JunctionPort,
        branch: JunctionPort,
        through: JunctionPort,
    ) -> Result<Self, FittingError> {
        Ok(Self {
            temperature,
            direction,
            angle: positive("angle", angle)?,
            combined,
            branch,
            through,
        })
    }
}

/// Losses along both paths of a tee, with the reconciled flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeeLosses {
    /// Path between the combined port and the branch.
    pub to_branch: FittingLoss,

    /// Path between the combined port and the through port.
    pub to_through: FittingLoss,

    pub combined_flow: VolumeRate,
    pub branch_flow: VolumeRate,
    pub through_flow: VolumeRate,
}

/// Computes the losses of a tee.
///
/// # Errors
///
/// - [`FittingError::FlowSpecification`] unless exactly one port flow is missing
///   and the solved flow is positive.
/// - [`FittingError::Property`] if the air model fails at the input temperature.
pub fn tee<A: HasDensity + ?Sized>(input: &TeeInput, air: &A) -> Result<TeeLosses, FittingError> {
    let flows = junction::resolve(
        input.combined.flow,
        [input.branch.flow, input.through.flow],
        ["branch", "through"],
    )?;
    let [branch_flow, through_flow] = flows.sides;

    let paths = [
        SidePath {
            flow: branch_flow,
            section: input.branch.section,
            angle: input.angle.get(),
        },
        SidePath {
            flow: through_flow,
            section: input.through.section,
            angle: Angle::ZERO,
        },
    ];

    let solution = junction::solve(
        input.direction,
        &input.combined.section,
        flows.combined,
        &paths,
        input.temperature,
        air,
    )?;
    let [branch, through] = solution
        .coefficients
        .map(|zeta| FittingLoss::new(zeta, solution.velocity, solution.dynamic_pressure));

    tracing::debug!(
        to_branch_pa = branch.pressure_drop.get::<pascal>(),
        to_through_pa = through.pressure_drop.get::<pascal>(),
        "tee"
    );

    Ok(TeeLosses {
        to_branch: branch,
        to_through: through,
        combined_flow: flows.combined,
        branch_flow,
        through_flow,
    })
}

/// [`Model`] adapter computing tee losses with a bound air model.
#[derive(Debug, Clone, Default)]
pub struct TeeModel<A> {
    air: A,
}

impl<A: HasDensity> TeeModel<A> {
    #[must_use]
    pub fn new(air: A) -> Self {
        Self { air }
    }
}

impl<A: HasDensity> Model for TeeModel<A> {
    type Input = TeeInput;
    type Output = TeeLosses;
    type Error = FittingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        tee(input, &self.air)
    }
}
