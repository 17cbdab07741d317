use num_traits::Zero;
use thiserror::Error;

use crate::support::{
    constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive},
    geometry::GeometryError,
    thermo::PropertyError,
};

/// Errors returned by the fitting calculations.
///
/// Every variant is raised before a result is produced; a failed call has no
/// partial output.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FittingError {
    /// A cross-section or bend plane is invalid.
    #[error("invalid geometry")]
    Geometry(#[from] GeometryError),

    /// Junction flows are missing, over-specified or inconsistent.
    #[error("invalid junction flows")]
    FlowSpecification(#[from] FlowSpecificationError),

    /// Air properties could not be evaluated.
    #[error("air property evaluation failed")]
    Property(#[from] PropertyError),

    /// A scalar input is outside its allowed range.
    #[error("{quantity} is invalid")]
    InvalidInput {
        quantity: &'static str,
        source: ConstraintError,
    },
}

/// Errors raised while reconciling the flows of a junction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum FlowSpecificationError {
    /// More than one port flow is missing.
    #[error("{missing} port flows are missing, exactly one must be left unspecified")]
    Underdetermined { missing: usize },

    /// Every port flow was given.
    #[error("all port flows are given, exactly one must be left unspecified")]
    Overdetermined,

    /// A given or solved flow is not strictly positive.
    #[error("flow at the {port} port would be {flow_m3_per_h} m³/h, it must be positive")]
    NonPositive {
        port: &'static str,
        flow_m3_per_h: f64,
    },

    /// The reconciled flows do not conserve volume.
    ///
    /// The missing flow is solved from the others, so this only reports a
    /// failed post-condition check and no input is expected to produce it.
    #[error(
        "combined flow {combined_m3_per_h} m³/h does not equal the sum of the other ports {sum_m3_per_h} m³/h"
    )]
    Inconsistent {
        combined_m3_per_h: f64,
        sum_m3_per_h: f64,
    },
}

/// Checks that `value` is strictly positive, naming it in the error.
pub(crate) fn positive<T: PartialOrd + Zero>(
    quantity: &'static str,
    value: T,
) -> Result<Constrained<T, StrictlyPositive>, FittingError> {
    StrictlyPositive::new(value).map_err(|source| FittingError::InvalidInput { quantity, source })
}

/// Checks that `value` is not negative, naming it in the error.
pub(crate) fn non_negative<T: PartialOrd + Zero>(
    quantity: &'static str,
    value: T,
) -> Result<Constrained<T, NonNegative>, FittingError> {
    NonNegative::new(value).map_err(|source| FittingError::InvalidInput { quantity, source })
}
