//! Presence validators
//!
//! - [`NotNull`] - Validates that a value is present
//!
//! A value is absent when it is `None` or the unit value `()`.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! let validator = not_null::<Option<String>>();
//! assert!(validator.validate(&Some("hello".to_string())).is_ok());
//! assert!(validator.validate(&None).is_err());
//! ```

use crate::foundation::{Validate, ValidationError};
use std::marker::PhantomData;

// ============================================================================
// NULLABLE
// ============================================================================

/// Values that may be absent.
pub trait Nullable {
    /// Returns true when the value carries nothing.
    fn is_absent(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl Nullable for () {
    fn is_absent(&self) -> bool {
        true
    }
}

impl<T> Nullable for &T
where
    T: Nullable + ?Sized,
{
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

// ============================================================================
// NOT NULL
// ============================================================================

/// Validates that a [`Nullable`] value is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotNull<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Validate for NotNull<T>
where
    T: Nullable + ?Sized,
{
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_absent() {
            Err(ValidationError::new("required", "Value is required"))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotNull`] validator.
///
/// # Type Parameters
///
/// * `T` - The nullable type being validated, e.g. `Option<String>`
#[must_use]
pub fn not_null<T: ?Sized>() -> NotNull<T> {
    NotNull {
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_null() {
        assert!(not_null().validate(&Some(42)).is_ok());
        assert!(not_null().validate(&None::<i32>).is_err());
    }

    #[test]
    fn test_unit_is_absent() {
        let error = not_null::<()>().validate(&()).unwrap_err();
        assert_eq!(error.code, "required");
    }

    #[test]
    fn test_reference_forwards() {
        let value = Some("x");
        assert!(not_null::<&Option<&str>>().validate(&&value).is_ok());
    }
}
