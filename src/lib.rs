#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Duct Resistance
//!
//! Pressure-loss models for individual air-duct fittings: straight ducts,
//! bends, tees, crosses and cross-section transitions.
//!
//! Loss coefficients follow the empirical correlations of the ventilation
//! handbooks (Idelchik, *Handbook of Hydraulic Resistance*; Shchekin and
//! Korenevsky, *Handbook of Heat Supply and Ventilation*). Air properties come
//! from either a tabulated handbook model or, with the `coolprop` feature, a
//! CoolProp-backed reference model.
//!
//! ## Crate layout
//!
//! - [`models`]: Fitting loss calculations and their [`twine_core::Model`] adapters.
//! - [`support`]: Geometry, flow primitives, air properties and numeric constraints.
//!
//! ## Example
//!
//! ```
//! use duct_resistance::models::ventilation::duct::{DuctInput, duct};
//! use duct_resistance::support::geometry::CrossSection;
//! use duct_resistance::support::thermo::model::Tabulated;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature, VolumeRate},
//!     length::meter,
//!     pressure::pascal,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let input = DuctInput::new(
//!     VolumeRate::new::<cubic_meter_per_hour>(600.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(0.0),
//!     CrossSection::circular(Length::new::<meter>(0.16)).unwrap(),
//!     Length::new::<meter>(1.37),
//! )
//! .unwrap();
//!
//! let loss = duct(&input, &Tabulated::default()).unwrap();
//! assert!((loss.pressure_drop.get::<pascal>() - 12.06).abs() < 0.05);
//! ```
//!
//! ## Diagnostics
//!
//! Intermediate values (velocity, Reynolds number, friction factor, loss
//! coefficients) are emitted as [`tracing`] events at `debug` level. The crate
//! never installs a subscriber.

pub mod models;
pub mod support;
