//! Extensions to [`uom`].
//!
//! [`uom`] has no kinematic viscosity quantity. It shares its dimension,
//! L²·T⁻¹, with the diffusion coefficient, so [`KinematicViscosity`] is an
//! alias of that quantity and is created and read through the
//! [`diffusion_coefficient`](uom::si::diffusion_coefficient) units:
//!
//! ```
//! use duct_resistance::support::units::KinematicViscosity;
//! use uom::si::diffusion_coefficient::square_meter_per_second;
//!
//! let nu = KinematicViscosity::new::<square_meter_per_second>(15.06e-6);
//! assert_eq!(nu.get::<square_meter_per_second>(), 15.06e-6);
//! ```

/// Kinematic viscosity, m²/s in SI.
pub type KinematicViscosity = uom::si::f64::DiffusionCoefficient;
