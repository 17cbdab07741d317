use std::{fmt, str::FromStr};

use crate::support::selector::{UnknownModelError, parse_keyword};

/// Selects between the revised handbook correlations and the legacy
/// worksheet variant.
///
/// | Fitting | Revised | Legacy |
/// |---|---|---|
/// | Bend | Roughness and Reynolds corrections `k_Δ`, `k_Re` applied | `k_Δ = k_Re = 1` |
/// | Contraction | Polynomial local coefficient | Local coefficient zero, friction only |
/// | Transition velocity | Inlet section | Outlet section |
///
/// Straight ducts and junctions have a single form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CorrelationVersion {
    #[default]
    Revised,
    Legacy,
}

impl FromStr for CorrelationVersion {
    type Err = UnknownModelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_keyword(
            "correlation version",
            text,
            &[
                ("revised", Self::Revised),
                ("current", Self::Revised),
                ("legacy", Self::Legacy),
                ("22", Self::Legacy),
            ],
        )
    }
}

impl fmt::Display for CorrelationVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Revised => "revised",
            Self::Legacy => "legacy",
        })
    }
}
