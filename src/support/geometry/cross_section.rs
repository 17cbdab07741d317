use std::f64::consts::PI;

use uom::si::f64::{Area, Length};

use crate::support::constraint::{Constrained, StrictlyPositive};

use super::GeometryError;

/// A validated duct cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum CrossSection {
    Rectangular {
        height: Constrained<Length, StrictlyPositive>,
        width: Constrained<Length, StrictlyPositive>,
    },
    Circular {
        diameter: Constrained<Length, StrictlyPositive>,
    },
}

impl CrossSection {
    /// Creates a rectangular section.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if either side is not strictly positive.
    pub fn rectangular(height: Length, width: Length) -> Result<Self, GeometryError> {
        Ok(Self::Rectangular {
            height: positive("height", height)?,
            width: positive("width", width)?,
        })
    }

    /// Creates a circular section.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimension`] if the diameter is not strictly positive.
    pub fn circular(diameter: Length) -> Result<Self, GeometryError> {
        Ok(Self::Circular {
            diameter: positive("diameter", diameter)?,
        })
    }

    /// Builds a section from optional dimensions, as they arrive from a form
    /// or worksheet row.
    ///
    /// Exactly one representation must be present: both `height` and `width`,
    /// or `diameter` alone.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::Ambiguous`] if a diameter is given alongside any side.
    /// - [`GeometryError::Incomplete`] if only one side is given.
    /// - [`GeometryError::Missing`] if nothing is given.
    /// - [`GeometryError::InvalidDimension`] for non-positive values.
    pub fn from_dimensions(
        height: Option<Length>,
        width: Option<Length>,
        diameter: Option<Length>,
    ) -> Result<Self, GeometryError> {
        match (height, width, diameter) {
            (None, None, Some(d)) => Self::circular(d),
            (Some(h), Some(w), None) => Self::rectangular(h, w),
            (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => Err(GeometryError::Ambiguous),
            (Some(_), None, None) | (None, Some(_), None) => Err(GeometryError::Incomplete),
            (None, None, None) => Err(GeometryError::Missing),
        }
    }

    /// Hydraulic diameter, `4·A/P`.
    ///
    /// For a rectangle this reduces to `2·h·w/(h + w)`.
    #[must_use]
    pub fn hydraulic_diameter(&self) -> Length {
        match self {
            Self::Rectangular { height, width } => {
                let (h, w) = (height.get(), width.get());
                h * w * 2.0 / (h + w)
            }
            Self::Circular { diameter } => diameter.get(),
        }
    }

    /// Flow area.
    #[must_use]
    pub fn area(&self) -> Area {
        match self {
            Self::Rectangular { height, width } => height.get() * width.get(),
            Self::Circular { diameter } => {
                let d = diameter.get();
                d * d * (PI / 4.0)
            }
        }
    }

    /// Height of a rectangular section.
    #[must_use]
    pub fn height(&self) -> Option<Length> {
        match self {
            Self::Rectangular { height, .. } => Some(height.get()),
            Self::Circular { .. } => None,
        }
    }

    /// Width of a rectangular section.
    #[must_use]
    pub fn width(&self) -> Option<Length> {
        match self {
            Self::Rectangular { width, .. } => Some(width.get()),
            Self::Circular { .. } => None,
        }
    }

    /// Diameter of a circular section.
    #[must_use]
    pub fn diameter(&self) -> Option<Length> {
        match self {
            Self::Circular { diameter } => Some(diameter.get()),
            Self::Rectangular { .. } => None,
        }
    }
}

fn positive(
    dimension: &'static str,
    value: Length,
) -> Result<Constrained<Length, StrictlyPositive>, GeometryError> {
    StrictlyPositive::new(value)
        .map_err(|source| GeometryError::InvalidDimension { dimension, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{area::square_meter, length::meter};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    #[test]
    fn circular_hydraulic_diameter_is_the_diameter() {
        let section = CrossSection::circular(m(0.16)).unwrap();
        assert_relative_eq!(section.hydraulic_diameter().get::<meter>(), 0.16);
        assert_relative_eq!(
            section.area().get::<square_meter>(),
            0.020_106_19,
            epsilon = 1e-8
        );
    }

    #[test]
    fn rectangular_hydraulic_diameter() {
        let section = CrossSection::rectangular(m(0.3), m(0.6)).unwrap();
        assert_relative_eq!(
            section.hydraulic_diameter().get::<meter>(),
            0.4,
            epsilon = 1e-12
        );
        assert_relative_eq!(section.area().get::<square_meter>(), 0.18, epsilon = 1e-12);
    }

    #[test]
    fn square_and_circle_of_equal_size_differ_in_area_only() {
        let square = CrossSection::rectangular(m(0.2), m(0.2)).unwrap();
        let circle = CrossSection::circular(m(0.2)).unwrap();

        assert_relative_eq!(
            square.hydraulic_diameter().get::<meter>(),
            circle.hydraulic_diameter().get::<meter>(),
            epsilon = 1e-12
        );
        assert!(square.area() > circle.area());
    }

    #[test]
    fn from_dimensions_accepts_one_representation() {
        assert!(matches!(
            CrossSection::from_dimensions(None, None, Some(m(0.16))),
            Ok(CrossSection::Circular { .. })
        ));
        assert!(matches!(
            CrossSection::from_dimensions(Some(m(0.3)), Some(m(0.3)), None),
            Ok(CrossSection::Rectangular { .. })
        ));
    }

    #[test]
    fn from_dimensions_rejects_bad_combinations() {
        assert_eq!(
            CrossSection::from_dimensions(Some(m(0.3)), Some(m(0.3)), Some(m(0.16))),
            Err(GeometryError::Ambiguous)
        );
        assert_eq!(
            CrossSection::from_dimensions(None, Some(m(0.3)), Some(m(0.16))),
            Err(GeometryError::Ambiguous)
        );
        assert_eq!(
            CrossSection::from_dimensions(Some(m(0.3)), None, None),
            Err(GeometryError::Incomplete)
        );
        assert_eq!(
            CrossSection::from_dimensions(None, None, None),
            Err(GeometryError::Missing)
        );
    }

    #[test]
    fn non_positive_dimensions_are_named() {
        let error = CrossSection::rectangular(m(0.3), m(0.0)).unwrap_err();
        assert!(matches!(
            error,
            GeometryError::InvalidDimension {
                dimension: "width",
                ..
            }
        ));
        assert!(CrossSection::circular(m(-0.1)).is_err());
    }

    proptest! {
        #[test]
        fn rectangular_hydraulic_diameter_is_symmetric(h in 0.01_f64..5.0, w in 0.01_f64..5.0) {
            let a = CrossSection::rectangular(m(h), m(w)).unwrap();
            let b = CrossSection::rectangular(m(w), m(h)).unwrap();
            let (da, db) = (a.hydraulic_diameter().get::<meter>(), b.hydraulic_diameter().get::<meter>());
            prop_assert!((da - db).abs() <= 1e-12 * da.max(1.0));
        }

        #[test]
        fn hydraulic_diameter_lies_between_the_sides(h in 0.01_f64..5.0, w in 0.01_f64..5.0) {
            let dh = CrossSection::rectangular(m(h), m(w)).unwrap().hydraulic_diameter().get::<meter>();
            prop_assert!(dh >= h.min(w) - 1e-12);
            prop_assert!(dh <= h.max(w) + 1e-12);
        }
    }
}
