//! Numeric constraints checked once at construction.
//!
//! A [`Constrained<C>`] wraps an `f64` that is known to satisfy the marker
//! constraint `C`, so code receiving one does not need to check it again.
//!
//! # Provided constraints
//!
//! - [`Finite`]: not NaN or infinite
//! - [`StrictlyPositive`]: finite and greater than zero
//! - [`UnitInterval`]: finite and within the closed interval `[0, 1]`
//! - [`StandardGravity`]: within [`GRAVITY_TOLERANCE`] of [`STANDARD_GRAVITY`]
//!
//! # Example
//!
//! ```
//! use slide_core::constraint::{Constrained, UnitInterval};
//!
//! let mu = Constrained::<UnitInterval>::new(0.3).unwrap();
//! assert_eq!(mu.into_inner(), 0.3);
//!
//! assert!(UnitInterval::new(1.5).is_err());
//! ```

use std::marker::PhantomData;

use thiserror::Error;

use crate::{GRAVITY_TOLERANCE, STANDARD_GRAVITY};

/// A numeric invariant checked at construction time.
pub trait Constraint {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: f64) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value must be greater than zero")]
    NotPositive,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
    #[error("value must be 9.81 m/s²")]
    NotStandardGravity,
}

/// An `f64` known to satisfy the constraint `C`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<C: Constraint> {
    value: f64,
    _marker: PhantomData<C>,
}

impl<C: Constraint> Constrained<C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: f64) -> Result<Self, ConstraintError> {
        C::check(value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> f64 {
        self.value
    }
}

impl<C: Constraint> AsRef<f64> for Constrained<C> {
    fn as_ref(&self) -> &f64 {
        &self.value
    }
}

/// Marker for values that are neither NaN nor infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl Constraint for Finite {
    fn check(value: f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

/// Marker for finite values greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a `Constrained<StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotPositive`] if zero or negative.
    /// - [`ConstraintError::NotANumber`] or [`ConstraintError::Infinite`] if not finite.
    pub fn new(value: f64) -> Result<Constrained<Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Constraint for StrictlyPositive {
    fn check(value: f64) -> Result<(), ConstraintError> {
        Finite::check(value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConstraintError::NotPositive)
        }
    }
}

/// Marker for finite values in the closed unit interval `0 ≤ x ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a `Constrained<UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] or [`ConstraintError::Infinite`] if not finite.
    pub fn new(value: f64) -> Result<Constrained<Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Constraint for UnitInterval {
    fn check(value: f64) -> Result<(), ConstraintError> {
        Finite::check(value)?;
        if value < 0.0 {
            Err(ConstraintError::BelowMinimum)
        } else if value > 1.0 {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}

/// Marker for the one gravitational acceleration the simulator accepts.
///
/// Accepts values within [`GRAVITY_TOLERANCE`] of [`STANDARD_GRAVITY`], so
/// inputs such as `"9.810"` pass while lunar or rounded values do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardGravity;

impl StandardGravity {
    /// Constructs a `Constrained<StandardGravity>` if `value` is 9.81 m/s².
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotStandardGravity`] for any other finite value.
    /// - [`ConstraintError::NotANumber`] or [`ConstraintError::Infinite`] if not finite.
    pub fn new(value: f64) -> Result<Constrained<Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl Constraint for StandardGravity {
    fn check(value: f64) -> Result<(), ConstraintError> {
        Finite::check(value)?;
        if (value - STANDARD_GRAVITY).abs() <= GRAVITY_TOLERANCE {
            Ok(())
        } else {
            Err(ConstraintError::NotStandardGravity)
        }
    }
}
