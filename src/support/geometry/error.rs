use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors raised while validating or resolving duct geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GeometryError {
    /// Both a rectangular pair and a diameter were supplied.
    #[error("cross-section is ambiguous: give either height and width or a diameter, not both")]
    Ambiguous,

    /// Neither representation was supplied.
    #[error("cross-section is missing: give either height and width or a diameter")]
    Missing,

    /// Only one side of a rectangular section was supplied.
    #[error("rectangular cross-section needs both height and width")]
    Incomplete,

    /// A dimension was zero, negative or not a number.
    #[error("{dimension} is invalid")]
    InvalidDimension {
        dimension: &'static str,
        source: ConstraintError,
    },

    /// A rectangular bend was given without the plane it turns in.
    #[error("orientation is required for a rectangular bend")]
    MissingOrientation,

    /// Two sections of different area joined with no taper.
    #[error("transition between unequal areas has a zero taper angle")]
    DegenerateTransition,
}
