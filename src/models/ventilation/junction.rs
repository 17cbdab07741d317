//! Shared machinery for tees and crosses.
//!
//! A junction has one combined port and `N` side ports (the through port
//! and one or more branches). Flows are reconciled first, then each side
//! path gets a loss coefficient referenced to the combined-port velocity.

mod coefficients;
mod flows;

use std::{array, fmt, str::FromStr};

use uom::si::{
    f64::{Angle, Pressure, ThermodynamicTemperature, Velocity, VolumeRate},
    pressure::pascal,
    velocity::meter_per_second,
};

use crate::support::{
    flow,
    geometry::CrossSection,
    selector::{UnknownModelError, parse_keyword},
    thermo::{PropertyError, capability::HasDensity},
};

pub(crate) use flows::resolve;

/// Whether air merges into or splits from the combined port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlowDirection {
    /// Side streams merge into the combined port (exhaust systems).
    Converging,
    /// The combined stream splits into the side ports (supply systems).
    Diverging,
}

impl FromStr for FlowDirection {
    type Err = UnknownModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_keyword(
            "flow direction",
            s,
            &[
                ("converging", Self::Converging),
                ("converge", Self::Converging),
                ("exhaust", Self::Converging),
                ("diverging", Self::Diverging),
                ("diverge", Self::Diverging),
                ("supply", Self::Diverging),
            ],
        )
    }
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converging => "converging",
            Self::Diverging => "diverging",
        })
    }
}

/// One port of a tee or cross.
///
/// Exactly one port of a junction is left without a flow; it is solved from
/// volume conservation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JunctionPort {
    pub section: CrossSection,
    pub flow: Option<VolumeRate>,
}

impl JunctionPort {
    /// A port whose flow is to be solved.
    #[must_use]
    pub fn new(section: CrossSection) -> Self {
        Self {
            section,
            flow: None,
        }
    }

    /// A port with a known flow.
    #[must_use]
    pub fn with_flow(section: CrossSection, flow: VolumeRate) -> Self {
        Self {
            section,
            flow: Some(flow),
        }
    }
}

/// A side path leaving (or entering) the combined port.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidePath {
    pub flow: VolumeRate,
    pub section: CrossSection,
    /// Angle to the main axis; zero for the through port.
    pub angle: Angle,
}

/// Loss coefficients of every side path on the combined-port basis.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JunctionSolution<const N: usize> {
    pub coefficients: [f64; N],
    pub velocity: Velocity,
    pub dynamic_pressure: Pressure,
}

/// Evaluates the junction correlation for `N` side paths.
pub(crate) fn solve<A: HasDensity + ?Sized, const N: usize>(
    direction: FlowDirection,
    combined: &CrossSection,
    combined_flow: VolumeRate,
    paths: &[SidePath; N],
    temperature: ThermodynamicTemperature,
    air: &A,
) -> Result<JunctionSolution<N>, PropertyError> {
    let density = air.density(temperature)?;

    let v_c = flow::velocity(combined_flow, combined.area());
    let velocities: [Velocity; N] =
        array::from_fn(|i| flow::velocity(paths[i].flow, paths[i].section.area()));

    let coefficients = match direction {
        FlowDirection::Diverging => array::from_fn(|i| {
            coefficients::diverging(paths[i].angle, velocities[i], v_c)
        }),
        FlowDirection::Converging => {
            let v_base = coefficients::mixing_velocity(
                combined_flow,
                paths
                    .iter()
                    .zip(&velocities)
                    .map(|(path, &v)| (path.flow, v, path.angle)),
            );
            tracing::debug!(
                mixing_velocity_m_per_s = v_base.get::<meter_per_second>(),
                "junction"
            );
            array::from_fn(|i| coefficients::converging(velocities[i], v_c, v_base))
        }
    };

    let dynamic_pressure = flow::dynamic_pressure(v_c, density);

    tracing::debug!(
        %direction,
        combined_velocity_m_per_s = v_c.get::<meter_per_second>(),
        dynamic_pressure_pa = dynamic_pressure.get::<pascal>(),
        coefficients = ?coefficients,
        "junction"
    );

    Ok(JunctionSolution {
        coefficients,
        velocity: v_c,
        dynamic_pressure,
    })
}

/// A circular port, for tests.
#[cfg(test)]
pub(crate) fn round_port(diameter: f64, flow: Option<f64>) -> JunctionPort {
    use uom::si::{f64::Length, length::meter, volume_rate::cubic_meter_per_hour};

    let section = CrossSection::circular(Length::new::<meter>(diameter)).unwrap();
    match flow {
        Some(q) => JunctionPort::with_flow(section, VolumeRate::new::<cubic_meter_per_hour>(q)),
        None => JunctionPort::new(section),
    }
}
