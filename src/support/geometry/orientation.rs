use std::{fmt, str::FromStr};

use crate::support::selector::{UnknownModelError, parse_keyword};

/// Plane a rectangular bend turns in.
///
/// A horizontal bend turns across the width of the duct, a vertical bend
/// across its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = UnknownModelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_keyword(
            "orientation",
            text,
            &[
                ("horizontal", Self::Horizontal),
                ("horiz", Self::Horizontal),
                ("vertical", Self::Vertical),
                ("vert", Self::Vertical),
            ],
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}
