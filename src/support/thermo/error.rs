use thiserror::Error;

/// Errors that may occur when evaluating air properties.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PropertyError {
    /// The property is undefined at the given state.
    #[error("undefined property: {context}")]
    Undefined { context: String },

    /// The input state is outside the model's valid domain.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    #[error("calculation error: {context}")]
    Calculation { context: String },

    /// A tabulated property was requested too far outside its table.
    #[error(transparent)]
    Extrapolation(#[from] ExtrapolationError),

    /// The selected model is not compiled into this build.
    #[error("property model `{model}` is unavailable: {reason}")]
    Unavailable { model: String, reason: String },
}

/// A tabulated lookup beyond the permitted extrapolation distance.
///
/// Linear extrapolation from the nearest boundary segment is allowed up to
/// twice that segment's span past the table edge.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "temperature {temperature} °C lies {distance} K beyond the table edge at {edge} °C \
     (at most {limit} K of extrapolation is allowed)"
)]
pub struct ExtrapolationError {
    /// Requested temperature, °C.
    pub temperature: f64,

    /// Nearest table temperature, °C.
    pub edge: f64,

    /// Distance from the edge to the requested temperature, K.
    pub distance: f64,

    /// Largest permitted distance, K.
    pub limit: f64,
}
