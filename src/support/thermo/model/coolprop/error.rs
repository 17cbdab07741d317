use std::fmt;

use crate::support::thermo::PropertyError;

/// The CoolProp call that failed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Step {
    /// Creating the `AbstractState` for a backend and fluid.
    Create { backend: &'static str, fluid: &'static str },

    /// Updating the state to a temperature (K) at atmospheric pressure.
    Update { temperature_k: f64 },

    /// Reading a property from an updated state.
    Output { property: &'static str, temperature_k: f64 },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Create { backend, fluid } => write!(f, "creating {backend}::{fluid}"),
            Self::Update { temperature_k } => {
                write!(f, "updating to {temperature_k} K at atmospheric pressure")
            }
            Self::Output {
                property,
                temperature_k,
            } => write!(f, "reading {property} at {temperature_k} K"),
        }
    }
}

/// Maps a CoolProp failure during `step` onto a [`PropertyError`].
///
/// `rfluids` reports failures as plain strings, so the variant is chosen by
/// substring. Unrecognized messages become [`PropertyError::Calculation`].
pub(super) fn property_error(step: Step, message: &str) -> PropertyError {
    const UNDEFINED: &[&str] = &["not defined", "not implemented"];
    const OUT_OF_DOMAIN: &[&str] = &[
        "out of range",
        "outside the range of validity",
        "must be in range",
        "below the minimum",
        "above the maximum",
    ];
    const INVALID_STATE: &[&str] = &["not a valid number", "invalid state", "invalid number"];

    let lowered = message.to_lowercase();
    let context = format!("{step}: {message}");
    let matches = |needles: &[&str]| needles.iter().any(|needle| lowered.contains(needle));

    if matches(UNDEFINED) {
        PropertyError::Undefined { context }
    } else if matches(OUT_OF_DOMAIN) {
        PropertyError::OutOfDomain { context }
    } else if matches(INVALID_STATE) {
        PropertyError::InvalidState { context }
    } else {
        PropertyError::Calculation { context }
    }
}
