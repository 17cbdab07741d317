//! Junction loss coefficients (Shchekin and Korenevsky, formulas 51 and 55).
//!
//! All coefficients are referenced to the combined-port velocity `v_c`.

use uom::{
    ConstZero,
    si::{
        angle::radian,
        f64::{Angle, Velocity, VolumeRate},
        ratio::ratio,
    },
};

/// Coefficient of one path of a dividing junction.
///
/// ```text
/// ζ = sin²α + (cosα − v/v_c)²                       if v_c·cosα > v
/// ζ = sin²α + 0.5·(1 − v_c·cosα/v)·(v/v_c)²         otherwise
/// ```
pub(super) fn diverging(angle: Angle, velocity: Velocity, combined: Velocity) -> f64 {
    let (sin, cos) = angle.get::<radian>().sin_cos();
    let relative = (velocity / combined).get::<ratio>();

    if combined * cos > velocity {
        sin * sin + (cos - relative).powi(2)
    } else {
        sin * sin + 0.5 * (1.0 - cos / relative) * relative * relative
    }
}

/// Most favourable mixing velocity, `Σ Q_i/Q_c · v_i · cosα_i`.
pub(super) fn mixing_velocity(
    combined_flow: VolumeRate,
    paths: impl IntoIterator<Item = (VolumeRate, Velocity, Angle)>,
) -> Velocity {
    paths
        .into_iter()
        .fold(Velocity::ZERO, |sum, (flow, velocity, angle)| {
            let share = (flow / combined_flow).get::<ratio>();
            sum + velocity * (share * angle.get::<radian>().cos())
        })
}

/// Coefficient of one path of a merging junction.
///
/// ```text
/// ζ = (v/v_c)² − (v_base/v_c)² + (v_base/v_c − 1)²      if v_base > v_c
/// ζ = (v/v_c)² − (v_base/v_c)² + 0.5·(1 − v_base/v_c)   otherwise
/// ```
pub(super) fn converging(velocity: Velocity, combined: Velocity, mixing: Velocity) -> f64 {
    let relative = (velocity / combined).get::<ratio>();
    let base = (mixing / combined).get::<ratio>();

    let mixing_term = if mixing > combined {
        (base - 1.0).powi(2)
    } else {
        0.5 * (1.0 - base)
    };
    relative * relative - base * base + mixing_term
}
