//! Type-level numeric constraints checked once at construction.
//!
//! Fitting inputs carry physical quantities that only make sense within a
//! sign range: a duct length or a volumetric flow must be strictly positive,
//! while a wall roughness may be zero for a hydraulically smooth wall.
//! Wrapping those quantities in [`Constrained<T, C>`] moves the check to the
//! boundary so the calculation code never re-validates them.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker works with any `T: PartialOrd + Zero`, which covers plain
//! floats and [`uom`] quantities alike.
//!
//! # Extending
//!
//! Custom invariants can be expressed by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use duct_resistance::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let diameter = Constrained::<_, StrictlyPositive>::new(Length::new::<millimeter>(160.0)).unwrap();
/// assert_eq!(diameter.into_inner().get::<millimeter>(), 160.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value the caller knows satisfies the constraint, such as a
    /// built-in default.
    ///
    /// The constraint is checked in debug builds.
    pub(crate) fn new_unchecked(value: T) -> Self {
        debug_assert!(
            C::check(&value).is_ok(),
            "new_unchecked called with a value violating its constraint"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    pub fn get(&self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Deserializes the inner value and re-checks the constraint.
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for Constrained<T, C>
where
    T: serde::Deserialize<'de>,
    C: Constraint<T>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
