//! Public fitting models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by domain. All current models live in [`ventilation`]
//! and compute the static-pressure loss across one duct fitting.
//!
//! # Model structure
//!
//! Each fitting module exposes two entry points: a plain function taking an
//! input and an air model, and a [`twine_core::Model`] adapter that binds the
//! air model once and is then called with inputs alone. The adapter is a thin
//! wrapper that delegates to the function. Piecewise correlation factors live
//! in private submodules next to the fitting that uses them.

pub mod ventilation;
