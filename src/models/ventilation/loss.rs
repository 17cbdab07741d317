use uom::si::f64::{Pressure, Velocity};

/// Pressure loss along one path through a fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingLoss {
    /// Static-pressure drop, `coefficient × dynamic_pressure`.
    pub pressure_drop: Pressure,

    /// Total loss coefficient ζ.
    pub coefficient: f64,

    /// Velocity the coefficient is referenced to.
    pub velocity: Velocity,

    /// Dynamic pressure at `velocity`.
    pub dynamic_pressure: Pressure,
}

impl FittingLoss {
    pub(crate) fn new(coefficient: f64, velocity: Velocity, dynamic_pressure: Pressure) -> Self {
        Self {
            pressure_drop: dynamic_pressure * coefficient,
            coefficient,
            velocity,
            dynamic_pressure,
        }
    }
}
