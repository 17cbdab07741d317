//! Pressure-loss models for air-duct fittings.
//!
//! | Fitting | Entry point | Adapter |
//! |---|---|---|
//! | Straight duct | [`duct::duct`] | [`duct::DuctModel`] |
//! | Bend | [`elbow::elbow`] | [`elbow::ElbowModel`] |
//! | Tee | [`tee::tee`] | [`tee::TeeModel`] |
//! | Cross | [`cross::cross`] | [`cross::CrossModel`] |
//! | Transition | [`transition::transition`] | [`transition::TransitionModel`] |
//!
//! Every loss is a coefficient times a dynamic pressure. Single-path
//! fittings report one [`FittingLoss`]; junctions report one per outgoing
//! (or incoming) path, all referenced to the combined port.
//!
//! Where the handbook correlations were later revised, [`CorrelationVersion`]
//! selects between the revised form and the legacy worksheet form.

mod error;
mod junction;
mod loss;
mod version;

pub mod cross;
pub mod duct;
pub mod elbow;
pub mod tee;
pub mod transition;

pub use error::{FittingError, FlowSpecificationError};
pub use junction::{FlowDirection, JunctionPort};
pub use loss::FittingLoss;
pub use version::CorrelationVersion;
