//! Air property models.
//!
//! - [`Tabulated`]: handbook model, ideal-gas density and a piecewise-linear
//!   viscosity table.
//! - [`CoolProp`]: reference model backed by `CoolProp` (feature `coolprop`).
//!
//! [`PropertyModel`] names a model at run time and [`AirModel`] dispatches to
//! whichever one was selected.

mod selection;
mod tabulated;

pub(crate) mod ideal_gas_eos;

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub mod coolprop;

pub use selection::{AirModel, PropertyModel};
pub use tabulated::{Tabulated, ViscosityTable, ViscosityTableError};

#[cfg(feature = "coolprop")]
#[cfg_attr(docsrs, doc(cfg(feature = "coolprop")))]
pub use coolprop::{CoolProp, CoolPropFluid};
