//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted (constants for the tabulated model, backend identifiers for
//! `CoolProp`).

mod air;

pub use air::Air;
