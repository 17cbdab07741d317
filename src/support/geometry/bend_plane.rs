use uom::si::{f64::Length, ratio::ratio};

use super::{CrossSection, GeometryError, Orientation};

/// The cross-section of a bend as seen from its plane of turning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BendPlane {
    Circular {
        diameter: Length,
    },
    Rectangular {
        /// Side lying in the plane of the bend (`b0`).
        in_plane: Length,

        /// Ratio of the out-of-plane side to the in-plane side (`a0/b0`).
        aspect_ratio: f64,

        /// Ratio of height to width, independent of orientation.
        height_to_width: f64,
    },
}

impl BendPlane {
    /// Resolves the bend plane for `section`.
    ///
    /// The orientation is ignored for circular sections.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::MissingOrientation`] for a rectangular section
    /// without an orientation.
    pub fn resolve(
        section: &CrossSection,
        orientation: Option<Orientation>,
    ) -> Result<Self, GeometryError> {
        match *section {
            CrossSection::Circular { diameter } => Ok(Self::Circular {
                diameter: diameter.get(),
            }),
            CrossSection::Rectangular { height, width } => {
                let (h, w) = (height.get(), width.get());
                let (in_plane, out_of_plane) =
                    match orientation.ok_or(GeometryError::MissingOrientation)? {
                        Orientation::Horizontal => (w, h),
                        Orientation::Vertical => (h, w),
                    };
                Ok(Self::Rectangular {
                    in_plane,
                    aspect_ratio: (out_of_plane / in_plane).get::<ratio>(),
                    height_to_width: (h / w).get::<ratio>(),
                })
            }
        }
    }

    /// The dimension the bend radius is compared against (`b0` or `d`).
    #[must_use]
    pub fn in_plane(&self) -> Length {
        match *self {
            Self::Circular { diameter } => diameter,
            Self::Rectangular { in_plane, .. } => in_plane,
        }
    }
}
