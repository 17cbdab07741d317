//! Supporting utilities used by the fitting models.
//!
//! These modules are public because they are useful on their own (for
//! example, computing a hydraulic diameter or an air density), but their APIs
//! are not stable.

pub mod constraint;
pub mod flow;
pub mod geometry;
pub mod selector;
pub mod thermo;
pub mod units;
