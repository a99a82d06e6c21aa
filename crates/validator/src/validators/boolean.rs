//! Boolean validators

use crate::foundation::{Validate, ValidationError};

/// Validates that a boolean value is `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsTrue;

impl Validate for IsTrue {
    type Input = bool;

    fn validate(&self, input: &bool) -> Result<(), ValidationError> {
        if *input {
            Ok(())
        } else {
            Err(ValidationError::new("is_true", "Value must be true"))
        }
    }
}

/// Validates that a boolean value is `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsFalse;

impl Validate for IsFalse {
    type Input = bool;

    fn validate(&self, input: &bool) -> Result<(), ValidationError> {
        if *input {
            Err(ValidationError::new("is_false", "Value must be false"))
        } else {
            Ok(())
        }
    }
}

/// Creates an [`IsTrue`] validator.
#[must_use]
pub const fn is_true() -> IsTrue {
    IsTrue
}

/// Creates an [`IsFalse`] validator.
#[must_use]
pub const fn is_false() -> IsFalse {
    IsFalse
}
