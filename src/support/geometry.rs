//! Duct cross-section geometry.
//!
//! A duct port is either rectangular (height × width) or circular
//! (diameter). [`CrossSection`] encodes that choice as a tagged union so a
//! port can never carry both representations, and derives the two quantities
//! every correlation needs: the hydraulic diameter and the flow area.
//!
//! [`BendPlane`] resolves which side of a rectangular section lies in the
//! plane of a bend, given an [`Orientation`].

mod bend_plane;
mod cross_section;
mod error;
mod orientation;

pub use bend_plane::BendPlane;
pub use cross_section::CrossSection;
pub use error::GeometryError;
pub use orientation::Orientation;
