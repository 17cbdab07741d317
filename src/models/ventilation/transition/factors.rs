//! Taper geometry and local coefficients of a transition (Idelchik 5-5, 5-6).

use std::f64::consts::PI;

use uom::si::{f64::Length, ratio::ratio};

use crate::{models::ventilation::CorrelationVersion, support::geometry::CrossSection};

/// Largest change of a matching dimension between two sections.
///
/// Rectangles compare height with height and width with width. A rectangle
/// joined to a circle compares the diameter with both sides.
pub(super) fn largest_dimension_change(inlet: &CrossSection, outlet: &CrossSection) -> Length {
    let change = |a: Length, b: Length| (a - b).abs();
    let larger = |a: Length, b: Length| if a > b { a } else { b };

    match (*inlet, *outlet) {
        (CrossSection::Circular { diameter: a }, CrossSection::Circular { diameter: b }) => {
            change(a.get(), b.get())
        }
        (
            CrossSection::Rectangular {
                height: h1,
                width: w1,
            },
            CrossSection::Rectangular {
                height: h2,
                width: w2,
            },
        ) => larger(change(h1.get(), h2.get()), change(w1.get(), w2.get())),
        (CrossSection::Circular { diameter }, CrossSection::Rectangular { height, width })
        | (CrossSection::Rectangular { height, width }, CrossSection::Circular { diameter }) => {
            let d = diameter.get();
            larger(change(d, height.get()), change(d, width.get()))
        }
    }
}

/// Half the taper angle in radians, `atan(Δ/(2·L))`.
pub(super) fn half_angle(change: Length, length: Length) -> f64 {
    (change / (length * 2.0)).get::<ratio>().atan()
}

/// Local coefficient of a gradual expansion with area ratio `n > 1`.
pub(super) fn expansion(half_angle: f64, n: f64) -> f64 {
    3.2 * half_angle.tan().powf(1.25) * (1.0 - 1.0 / n).powi(2)
}

/// Local coefficient of a gradual contraction with area ratio `n > 1`.
///
/// The legacy worksheet keeps only the friction term.
pub(super) fn contraction(half_angle: f64, n: f64, version: CorrelationVersion) -> f64 {
    match version {
        CorrelationVersion::Legacy => 0.0,
        CorrelationVersion::Revised => {
            let alpha = 2.0 * half_angle;
            let area_term =
                -0.0125 * n.powi(4) + 0.0224 * n.powi(3) - 0.00723 * n * n + 0.00444 * n - 0.00745;
            area_term * (alpha.powi(3) + 2.0 * PI * alpha * alpha - 10.0 * alpha)
        }
    }
}

/// Friction along the tapered wall.
pub(super) fn friction(friction_factor: f64, half_angle: f64, n: f64) -> f64 {
    friction_factor / (8.0 * half_angle.sin()) * (1.0 - 1.0 / (n * n))
}
