//! Cross junction: a combined port, a through port and two side branches.
//!
//! Each path is treated as a tee path on one shared combined-port basis.
//! Three of the four flows are given; any one of them may be the unknown.

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

/// One side branch of a cross.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossBranch {
    pub port: JunctionPort,

    /// Angle between the branch and the through port.
    pub angle: Constrained<Angle, StrictlyPositive>,
}

impl CrossBranch {
    /// # Errors
    ///
    /// Returns [`FittingError::InvalidInput`] if `angle` is not strictly positive.
    pub fn new(port: JunctionPort, angle: Angle) -> Result<Self, FittingError> {
        Ok(Self {
            port,
            angle: positive("angle", angle)?,
        })
    }
}

/// A cross with its four ports.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossInput {
    pub temperature: ThermodynamicTemperature,
    pub direction: FlowDirection,
    pub combined: JunctionPort,
    pub branch_1: CrossBranch,
    pub branch_2: CrossBranch,
    pub through: JunctionPort,
}

/// Losses along the three paths of a cross, with the reconciled flows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossLosses {
    pub to_branch_1: FittingLoss,
    pub to_branch_2: FittingLoss,
    pub to_through: FittingLoss,

    pub combined_flow: VolumeRate,
    pub branch_1_flow: VolumeRate,
    pub branch_2_flow: VolumeRate,
    pub through_flow: VolumeRate,
}

/// Computes the losses of a cross.
///
/// # Errors
///
/// - [`FittingError::FlowSpecification`] unless exactly one port flow is missing
///   and the solved flow is positive.
/// - [`FittingError::Property`] if the air model fails at the input temperature.
pub fn cross<A: HasDensity + ?Sized>(
    input: &CrossInput,
    air: &A,
) -> Result<CrossLosses, FittingError> {
    let flows = junction::resolve(
        input.combined.flow,
        [
            input.branch_1.port.flow,
            input.branch_2.port.flow,
            input.through.flow,
        ],
        ["branch 1", "branch 2", "through"],
    )?;
    let [branch_1_flow, branch_2_flow, through_flow] = flows.sides;

    let branch = |flow, branch: &CrossBranch| SidePath {
        flow,
        section: branch.port.section,
        angle: branch.angle.get(),
    };
    let paths = [
        branch(branch_1_flow, &input.branch_1),
        branch(branch_2_flow, &input.branch_2),
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
    let [to_branch_1, to_branch_2, to_through] = solution
        .coefficients
        .map(|zeta| FittingLoss::new(zeta, solution.velocity, solution.dynamic_pressure));

    tracing::debug!(
        to_branch_1_pa = to_branch_1.pressure_drop.get::<pascal>(),
        to_branch_2_pa = to_branch_2.pressure_drop.get::<pascal>(),
        to_through_pa = to_through.pressure_drop.get::<pascal>(),
        "cross"
    );

    Ok(CrossLosses {
        to_branch_1,
        to_branch_2,
        to_through,
        combined_flow: flows.combined,
        branch_1_flow,
        branch_2_flow,
        through_flow,
    })
}

/// [`Model`] adapter computing cross losses with a bound air model.
#[derive(Debug, Clone, Default)]
pub struct CrossModel<A> {
    air: A,
}

impl<A: HasDensity> CrossModel<A> {
    #[must_use]
    pub fn new(air: A) -> Self {
        Self { air }
    }
}

impl<A: HasDensity> Model for CrossModel<A> {
    type Input = CrossInput;
    type Output = CrossLosses;
    type Error = FittingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        cross(input, &self.air)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree, f64::Length, length::meter, thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_hour,
    };

    use crate::{
        models::ventilation::{FlowSpecificationError, junction::round_port},
        support::{geometry::CrossSection, thermo::model::Tabulated},
    };

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    fn rect_port(height: f64, width: f64, flow: Option<f64>) -> JunctionPort {
        let section =
            CrossSection::rectangular(Length::new::<meter>(height), Length::new::<meter>(width))
                .unwrap();
        match flow {
            Some(q) => JunctionPort::with_flow(section, VolumeRate::new::<cubic_meter_per_hour>(q)),
            None => JunctionPort::new(section),
        }
    }

    fn round_cross(direction: FlowDirection) -> CrossInput {
        CrossInput {
            temperature: ThermodynamicTemperature::new::<degree_celsius>(0.0),
            direction,
            combined: round_port(0.16, Some(900.0)),
            branch_1: CrossBranch::new(round_port(0.16, Some(300.0)), deg(90.0)).unwrap(),
            branch_2: CrossBranch::new(round_port(0.16, Some(300.0)), deg(90.0)).unwrap(),
            through: round_port(0.16, None),
        }
    }

    fn pascals(loss: &FittingLoss) -> f64 {
        loss.pressure_drop.get::<pascal>()
    }

    #[test]
    fn dividing_round_cross() {
        let losses = cross(&round_cross(FlowDirection::Diverging), &Tabulated::default()).unwrap();
        assert_relative_eq!(pascals(&losses.to_through), 44.423, epsilon = 0.01);
        assert_relative_eq!(pascals(&losses.to_branch_1), 105.506, epsilon = 0.01);
        assert_relative_eq!(pascals(&losses.to_branch_2), 105.506, epsilon = 0.01);
        assert_relative_eq!(
            losses.through_flow.get::<cubic_meter_per_hour>(),
            300.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn merging_round_cross() {
        let losses = cross(&round_cross(FlowDirection::Converging), &Tabulated::default()).unwrap();
        for loss in [losses.to_through, losses.to_branch_1, losses.to_branch_2] {
            assert_relative_eq!(pascals(&loss), 54.295, epsilon = 0.01);
        }
    }

    #[test]
    fn rectangular_main_with_angled_branches() {
        let branch = |q| CrossBranch::new(rect_port(0.2, 0.2, Some(q)), deg(60.0)).unwrap();
        let input = CrossInput {
            combined: rect_port(0.2, 0.4, Some(900.0)),
            branch_1: branch(300.0),
            branch_2: branch(300.0),
            ..round_cross(FlowDirection::Diverging)
        };

        let losses = cross(&input, &Tabulated::default()).unwrap();
        assert_relative_eq!(pascals(&losses.to_through), 1.366, epsilon = 0.005);
        assert_relative_eq!(pascals(&losses.to_branch_1), 5.086, epsilon = 0.005);
        assert_relative_eq!(pascals(&losses.to_branch_2), 5.086, epsilon = 0.005);
    }

    #[test]
    fn any_single_flow_may_be_solved() {
        let input = CrossInput {
            combined: rect_port(0.2, 0.4, Some(900.0)),
            branch_2: CrossBranch::new(round_port(0.16, None), deg(90.0)).unwrap(),
            through: round_port(0.16, Some(300.0)),
            ..round_cross(FlowDirection::Diverging)
        };

        let losses = cross(&input, &Tabulated::default()).unwrap();
        assert_relative_eq!(
            losses.branch_2_flow.get::<cubic_meter_per_hour>(),
            300.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(pascals(&losses.to_through), 1.366, epsilon = 0.005);
        assert_relative_eq!(pascals(&losses.to_branch_1), 11.866, epsilon = 0.005);
        assert_relative_eq!(pascals(&losses.to_branch_2), 11.866, epsilon = 0.005);
    }

    #[test]
    fn three_of_four_flows_required() {
        let mut input = round_cross(FlowDirection::Diverging);
        input.through.flow = Some(VolumeRate::new::<cubic_meter_per_hour>(300.0));
        assert_eq!(
            cross(&input, &Tabulated::default()).unwrap_err(),
            FittingError::FlowSpecification(FlowSpecificationError::Overdetermined)
        );

        input.through.flow = None;
        input.combined.flow = None;
        assert_eq!(
            cross(&input, &Tabulated::default()).unwrap_err(),
            FittingError::FlowSpecification(FlowSpecificationError::Underdetermined {
                missing: 2
            })
        );
    }

    #[test]
    fn solved_through_flow_must_be_positive() {
        let mut input = round_cross(FlowDirection::Diverging);
        input.combined.flow = Some(VolumeRate::new::<cubic_meter_per_hour>(600.0));
        let error = cross(&input, &Tabulated::default()).unwrap_err();
        assert!(matches!(
            error,
            FittingError::FlowSpecification(FlowSpecificationError::NonPositive {
                port: "through",
                ..
            })
        ));
    }
}
