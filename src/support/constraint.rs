//! Numeric invariants enforced at construction time.
//!
//! Exchanger sizing consumes a lot of raw numbers: diameters, flow
//! rates, fouling factors, vapor qualities. Their validity is checked
//! once at the input boundary and then assumed everywhere downstream.
//! This module provides the small amount of type machinery used to make
//! that assumption safe: a [`Constrained<T, C>`] wrapper whose marker
//! type `C` names the invariant.
//!
//! Provided markers:
//!
//! - [`StrictlyPositive`]: greater than zero (flows, diameters, duty)
//! - [`NonNegative`]: zero or greater (fouling factors, roughness)
//! - [`UnitInterval`]: closed interval `0 ≤ x ≤ 1` (vapor quality)
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for
//! a zero-sized marker type.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
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
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value guaranteed to satisfy the constraint named by `C`.
///
/// # Example
///
/// ```
/// use hairpin::support::constraint::{Constrained, StrictlyPositive};
///
/// let diameter = StrictlyPositive::new(0.025).unwrap();
/// assert_eq!(diameter.into_inner(), 0.025);
/// assert!(StrictlyPositive::new(-0.025_f64).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
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

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
