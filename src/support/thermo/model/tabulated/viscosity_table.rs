use thiserror::Error;

use crate::support::thermo::ExtrapolationError;

use super::idelchik;

/// How far past a table edge extrapolation may reach, as a multiple of the
/// boundary segment's span.
pub const EXTRAPOLATION_LIMIT: f64 = 2.0;

/// Errors raised when building a [`ViscosityTable`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ViscosityTableError {
    #[error("a viscosity table needs at least two points, got {count}")]
    TooFewPoints { count: usize },

    #[error("point {index} is not finite")]
    NotFinite { index: usize },

    #[error("temperatures must strictly increase, point {index} does not")]
    NotIncreasing { index: usize },

    #[error("viscosity at point {index} must be positive")]
    NonPositiveViscosity { index: usize },
}

/// Kinematic viscosity of air tabulated against temperature.
///
/// Points are `(temperature °C, ν m²/s)`, strictly ascending in temperature.
/// Lookups interpolate linearly inside the table and extrapolate linearly
/// from the boundary segment outside it, up to [`EXTRAPOLATION_LIMIT`] spans
/// past the edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")
)]
pub struct ViscosityTable {
    temperatures: Vec<f64>,
    viscosities: Vec<f64>,
}

impl ViscosityTable {
    /// Builds a table from `(temperature °C, ν m²/s)` points.
    ///
    /// # Errors
    ///
    /// Returns [`ViscosityTableError`] if there are fewer than two points, a
    /// value is not finite, temperatures do not strictly increase, or a
    /// viscosity is not positive.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, ViscosityTableError> {
        if points.len() < 2 {
            return Err(ViscosityTableError::TooFewPoints {
                count: points.len(),
            });
        }

        for (index, &(t, nu)) in points.iter().enumerate() {
            if !t.is_finite() || !nu.is_finite() {
                return Err(ViscosityTableError::NotFinite { index });
            }
            if nu <= 0.0 {
                return Err(ViscosityTableError::NonPositiveViscosity { index });
            }
            if index > 0 && t <= points[index - 1].0 {
                return Err(ViscosityTableError::NotIncreasing { index });
            }
        }

        let (temperatures, viscosities) = points.into_iter().unzip();
        Ok(Self {
            temperatures,
            viscosities,
        })
    }

    /// The Idelchik table for dry air at atmospheric pressure, −40 °C to 800 °C.
    #[must_use]
    pub fn idelchik() -> Self {
        let (temperatures, viscosities) = idelchik::KINEMATIC_VISCOSITY
            .iter()
            .map(|&(t, nu)| (t, nu * idelchik::SCALE))
            .unzip();
        Self {
            temperatures,
            viscosities,
        }
    }

    /// Temperature range covered by the table, °C.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.temperatures[0], self.temperatures[self.temperatures.len() - 1])
    }

    /// Interpolated kinematic viscosity at `celsius`, m²/s.
    ///
    /// # Errors
    ///
    /// Returns [`ExtrapolationError`] when `celsius` lies further outside the
    /// table than the guard allows, or is NaN.
    pub fn lookup(&self, celsius: f64) -> Result<f64, ExtrapolationError> {
        let t = &self.temperatures;
        let nu = &self.viscosities;
        let last = t.len() - 1;

        // First index whose temperature is not below the query.
        let upper = t.partition_point(|&x| x < celsius);
        if upper <= last && t[upper] == celsius {
            return Ok(nu[upper]);
        }

        let segment = match upper {
            0 => {
                self.check_extrapolation(celsius, 0, 1)?;
                0
            }
            i if i > last => {
                self.check_extrapolation(celsius, last, last - 1)?;
                last - 1
            }
            i => i - 1,
        };

        let (t0, t1) = (t[segment], t[segment + 1]);
        let (nu0, nu1) = (nu[segment], nu[segment + 1]);
        Ok(nu0 + (nu1 - nu0) * (celsius - t0) / (t1 - t0))
    }

    fn check_extrapolation(
        &self,
        celsius: f64,
        edge: usize,
        neighbour: usize,
    ) -> Result<(), ExtrapolationError> {
        let edge_t = self.temperatures[edge];
        let span = (self.temperatures[neighbour] - edge_t).abs();
        let distance = (celsius - edge_t).abs();
        let limit = EXTRAPOLATION_LIMIT * span;
        if distance.is_nan() || distance > limit {
            return Err(ExtrapolationError {
                temperature: celsius,
                edge: edge_t,
                distance,
                limit,
            });
        }
        tracing::trace!(celsius, edge = edge_t, distance, "extrapolating viscosity table");
        Ok(())
    }
}

impl TryFrom<Vec<(f64, f64)>> for ViscosityTable {
    type Error = ViscosityTableError;

    fn try_from(points: Vec<(f64, f64)>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<ViscosityTable> for Vec<(f64, f64)> {
    fn from(table: ViscosityTable) -> Self {
        table.temperatures.into_iter().zip(table.viscosities).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn built_in_table_is_valid() {
        let table = ViscosityTable::idelchik();
        let points: Vec<(f64, f64)> = table.clone().into();
        assert_eq!(ViscosityTable::new(points), Ok(table));
    }

    #[test]
    fn breakpoints_are_returned_exactly() {
        let table = ViscosityTable::idelchik();
        for &(t, nu) in idelchik::KINEMATIC_VISCOSITY {
            assert_eq!(table.lookup(t), Ok(nu * idelchik::SCALE));
        }
    }

    #[test]
    fn interpolates_inside_segment() {
        let table = ViscosityTable::idelchik();
        assert_relative_eq!(table.lookup(-25.0).unwrap(), 11.2175e-6, epsilon = 1e-15);
        assert_relative_eq!(table.lookup(5.0).unwrap(), 13.72e-6, epsilon = 1e-15);
    }

    #[test]
    fn extrapolates_below_up_to_twice_the_first_span() {
        let table = ViscosityTable::idelchik();

        // Slope of the first segment is 1.57e-6 / 20 K.
        assert_relative_eq!(table.lookup(-41.0).unwrap(), 9.9615e-6, epsilon = 1e-15);
        assert_relative_eq!(table.lookup(-80.0).unwrap(), 6.9e-6, epsilon = 1e-15);

        let error = table.lookup(-81.0).unwrap_err();
        assert_relative_eq!(error.edge, -40.0);
        assert_relative_eq!(error.distance, 41.0);
        assert_relative_eq!(error.limit, 40.0);
    }

    #[test]
    fn extrapolates_above_up_to_twice_the_last_span() {
        let table = ViscosityTable::idelchik();

        // Slope of the last segment is 19.4e-6 / 100 K.
        assert_relative_eq!(table.lookup(850.0).unwrap(), 144.5e-6, epsilon = 1e-12);
        assert!(table.lookup(1000.0).is_ok());
        assert!(table.lookup(1000.1).is_err());
    }

    #[test]
    fn non_finite_temperatures_are_rejected() {
        let table = ViscosityTable::idelchik();
        assert!(table.lookup(f64::NAN).is_err());
        assert!(table.lookup(f64::INFINITY).is_err());
        assert!(table.lookup(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn rejects_malformed_tables() {
        assert_eq!(
            ViscosityTable::new(vec![(0.0, 1.0e-5)]),
            Err(ViscosityTableError::TooFewPoints { count: 1 })
        );
        assert_eq!(
            ViscosityTable::new(vec![(0.0, 1.0e-5), (0.0, 1.1e-5)]),
            Err(ViscosityTableError::NotIncreasing { index: 1 })
        );
        assert_eq!(
            ViscosityTable::new(vec![(0.0, 1.0e-5), (10.0, 0.0)]),
            Err(ViscosityTableError::NonPositiveViscosity { index: 1 })
        );
        assert_eq!(
            ViscosityTable::new(vec![(f64::NAN, 1.0e-5), (10.0, 1.0e-5)]),
            Err(ViscosityTableError::NotFinite { index: 0 })
        );
    }

    proptest! {
        #[test]
        fn interpolation_stays_within_bracketing_values(t in -40.0_f64..800.0) {
            let table = ViscosityTable::idelchik();
            let nu = table.lookup(t).unwrap();
            let (lo, hi) = (10.04e-6, 134.8e-6);
            prop_assert!(nu >= lo - 1e-18 && nu <= hi + 1e-18);
        }

        #[test]
        fn lookup_is_monotonic_for_the_built_in_table(a in -80.0_f64..1000.0, b in -80.0_f64..1000.0) {
            let table = ViscosityTable::idelchik();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(table.lookup(lo).unwrap() <= table.lookup(hi).unwrap() + 1e-18);
        }
    }
}
