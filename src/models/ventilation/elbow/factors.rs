//! Piecewise factors of the bend correlation.

use crate::{models::ventilation::CorrelationVersion, support::geometry::BendPlane};

/// Reynolds number above which the roughness correction doubles.
const ROUGH_REGIME_REYNOLDS: f64 = 40_000.0;

/// Roughness and Reynolds corrections `(k_Δ, k_Re)`.
pub(super) fn corrections(reynolds: f64, version: CorrelationVersion) -> (f64, f64) {
    match version {
        CorrelationVersion::Legacy => (1.0, 1.0),
        CorrelationVersion::Revised => {
            let k_delta = if reynolds < ROUGH_REGIME_REYNOLDS {
                1.0
            } else {
                2.0
            };
            let k_re = 1.3 - 0.29 * (reynolds * 1.0e-5).ln();
            (k_delta, k_re)
        }
    }
}

/// `A1`, a function of the turning angle in degrees.
pub(super) fn angle_factor(angle: f64) -> f64 {
    if angle < 70.0 {
        0.9 * angle.to_radians().sin()
    } else if angle <= 100.0 {
        1.0
    } else {
        0.7 + 0.35 * angle / 90.0
    }
}

/// `B1`, a function of the relative radius `r0/b0`.
pub(super) fn radius_factor(relative_radius: f64) -> f64 {
    let exponent = if relative_radius <= 1.0 { -2.5 } else { -0.5 };
    0.21 * relative_radius.powf(exponent)
}

/// `C1`, the section-shape factor. Unity for circular bends.
pub(super) fn shape_factor(plane: &BendPlane) -> f64 {
    match *plane {
        BendPlane::Circular { .. } => 1.0,
        BendPlane::Rectangular {
            aspect_ratio,
            height_to_width,
            ..
        } => {
            if height_to_width <= 4.0 {
                0.85 + 0.125 / aspect_ratio
            } else {
                1.115 - 0.84 / aspect_ratio
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn angle_factor_regions() {
        assert_relative_eq!(angle_factor(30.0), 0.45, epsilon = 1e-12);
        assert_relative_eq!(angle_factor(70.0), 1.0);
        assert_relative_eq!(angle_factor(100.0), 1.0);
        assert_relative_eq!(angle_factor(180.0), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn radius_factor_switches_exponent_at_one() {
        assert_relative_eq!(radius_factor(1.0), 0.21);
        assert_relative_eq!(radius_factor(0.5), 0.21 * 0.5_f64.powf(-2.5));
        assert_relative_eq!(radius_factor(4.0), 0.105, epsilon = 1e-12);
    }

    #[test]
    fn legacy_skips_corrections() {
        assert_eq!(corrections(1.0e5, CorrelationVersion::Legacy), (1.0, 1.0));

        let (k_delta, k_re) = corrections(1.0e5, CorrelationVersion::Revised);
        assert_relative_eq!(k_delta, 2.0);
        assert_relative_eq!(k_re, 1.3, epsilon = 1e-12);

        let (k_delta, _) = corrections(39_999.0, CorrelationVersion::Revised);
        assert_relative_eq!(k_delta, 1.0);
    }

    #[test]
    fn shape_factor_by_aspect() {
        let circle = BendPlane::Circular {
            diameter: Length::new::<meter>(0.2),
        };
        assert_relative_eq!(shape_factor(&circle), 1.0);

        let square = BendPlane::Rectangular {
            in_plane: Length::new::<meter>(0.3),
            aspect_ratio: 1.0,
            height_to_width: 1.0,
        };
        assert_relative_eq!(shape_factor(&square), 0.975, epsilon = 1e-12);

        let tall = BendPlane::Rectangular {
            in_plane: Length::new::<meter>(0.1),
            aspect_ratio: 5.0,
            height_to_width: 5.0,
        };
        assert_relative_eq!(shape_factor(&tall), 1.115 - 0.168, epsilon = 1e-12);
    }
}
