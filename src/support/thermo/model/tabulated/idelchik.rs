/// Kinematic viscosity of dry air at atmospheric pressure, after Idelchik.
///
/// Pairs of (temperature °C, ν × 10⁶ m²/s).
pub(super) const KINEMATIC_VISCOSITY: &[(f64, f64)] = &[
    (-40.0, 10.04),
    (-20.0, 11.61),
    (0.0, 13.28),
    (10.0, 14.16),
    (20.0, 15.06),
    (30.0, 16.00),
    (40.0, 16.96),
    (50.0, 17.95),
    (60.0, 18.97),
    (70.0, 20.02),
    (80.0, 21.09),
    (90.0, 22.10),
    (100.0, 23.13),
    (120.0, 25.45),
    (140.0, 27.80),
    (160.0, 30.09),
    (180.0, 32.49),
    (200.0, 34.85),
    (250.0, 40.61),
    (300.0, 48.33),
    (350.0, 55.46),
    (400.0, 63.09),
    (500.0, 79.38),
    (600.0, 96.89),
    (700.0, 115.4),
    (800.0, 134.8),
];

/// Scale from the tabulated values to m²/s.
pub(super) const SCALE: f64 = 1.0e-6;
