//! Turns raw user input into [`Parameters`].
//!
//! Parsing and range checks live here so the integrator can stay total: it
//! accepts any float triple, and callers that need physically meaningful
//! runs validate first.

use std::fmt;

use thiserror::Error;

use crate::{
    Parameters,
    constraint::{Constrained, ConstraintError, StandardGravity, StrictlyPositive, UnitInterval},
};

/// The three user-supplied inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InitialVelocity,
    FrictionCoefficient,
    Gravity,
}

impl Field {
    /// All fields, in the order they are requested from the user.
    pub const ALL: [Field; 3] = [
        Field::InitialVelocity,
        Field::FrictionCoefficient,
        Field::Gravity,
    ];

    /// Checks a parsed value against the constraint for this field.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] if the value is not acceptable.
    pub fn check(self, value: f64) -> Result<f64, ValidationError> {
        let checked = match self {
            Field::InitialVelocity => StrictlyPositive::new(value).map(Constrained::into_inner),
            Field::FrictionCoefficient => UnitInterval::new(value).map(Constrained::into_inner),
            Field::Gravity => StandardGravity::new(value).map(Constrained::into_inner),
        };
        checked.map_err(|source| ValidationError::OutOfRange {
            field: self,
            value,
            source,
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::InitialVelocity => "initial velocity",
            Field::FrictionCoefficient => "coefficient of friction",
            Field::Gravity => "acceleration due to gravity",
        })
    }
}

/// Errors produced while validating user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: {text:?} is not a number")]
    NonNumeric { field: Field, text: String },

    #[error("{field}: {value} is out of range: {source}")]
    OutOfRange {
        field: Field,
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

impl ValidationError {
    /// The input the error refers to.
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Self::NonNumeric { field, .. } | Self::OutOfRange { field, .. } => *field,
        }
    }
}

/// Parses a single numeric input.
///
/// Surrounding whitespace is ignored. NaN and infinities are treated as
/// non-numeric.
///
/// # Errors
///
/// Returns [`ValidationError::NonNumeric`] if `text` is not a finite number.
pub fn parse_value(field: Field, text: &str) -> Result<f64, ValidationError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::NonNumeric {
            field,
            text: text.trim().to_owned(),
        })
}

/// Parses and checks a single input.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn parse_and_check(field: Field, text: &str) -> Result<f64, ValidationError> {
    field.check(parse_value(field, text)?)
}

/// Builds [`Parameters`] from the three inputs.
///
/// Requires `v0 > 0`, `0 ≤ mu ≤ 1`, and `g` equal to 9.81 m/s² within
/// [`GRAVITY_TOLERANCE`](crate::GRAVITY_TOLERANCE).
///
/// # Errors
///
/// Returns a [`ValidationError::OutOfRange`] for the first field, in
/// [`Field::ALL`] order, that fails its check.
pub fn validate(v0: f64, mu: f64, g: f64) -> Result<Parameters, ValidationError> {
    let v0 = Field::InitialVelocity.check(v0)?;
    let mu = Field::FrictionCoefficient.check(mu)?;
    let g = Field::Gravity.check(g)?;
    Ok(Parameters::new(v0, mu, g))
}
