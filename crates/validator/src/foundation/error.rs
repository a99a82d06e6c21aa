//! Error types for validation failures
//!
//! Every failing assertion in an engine ends up as one value produced by the
//! scope's [`ErrorFactory`](super::ErrorFactory). Unless a caller swaps the
//! factory, that value is a [`ValidationError`] carrying the assertion's
//! message verbatim.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// The error code attached to failures raised by the engines.
pub const VALIDATION_FAILED: &str = "validation_failed";

/// A validation failure with a machine-readable code and a human message.
///
/// `Display` renders the message only, so the text a caller supplied to an
/// assertion is exactly what ends up in logs and error chains.
///
/// # Examples
///
/// ```rust,ignore
/// use chainval::foundation::ValidationError;
///
/// // What the engines raise by default:
/// let error = ValidationError::failed("name must not be blank");
/// assert_eq!(error.code, "validation_failed");
///
/// // What the leaf validators return:
/// let error = ValidationError::new("not_blank", "Value must not be blank");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "validation_failed", "not_blank", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message, passed through untouched.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates the generic "validation failed" error the default factory produces.
    pub fn failed(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(VALIDATION_FAILED, message)
    }

    /// Returns true if this error was raised by an engine assertion
    /// rather than a leaf validator.
    #[must_use]
    pub fn is_validation_failure(&self) -> bool {
        self.code == VALIDATION_FAILED
    }
}

// ============================================================================
// MESSAGE EXTRACTION
// ============================================================================

/// Extracts the human-readable message of an upstream failure.
///
/// [`AsyncValidator::succeeds`](crate::engine::AsyncValidator::succeeds)
/// uses this to carry an upstream failure's text into a freshly
/// factory-built failure. Only the text survives; the upstream value's type
/// is dropped.
pub trait FailureMessage {
    /// Returns the message text of this failure.
    fn failure_message(&self) -> Cow<'_, str>;
}

impl FailureMessage for ValidationError {
    fn failure_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }
}

impl FailureMessage for String {
    fn failure_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl FailureMessage for &'static str {
    fn failure_message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl FailureMessage for std::io::Error {
    fn failure_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl FailureMessage for Box<dyn std::error::Error + Send + Sync> {
    fn failure_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let error = ValidationError::new("not_blank", "Value must not be blank");
        assert_eq!(error.to_string(), "Value must not be blank");
    }

    #[test]
    fn test_failed_uses_engine_code() {
        let error = ValidationError::failed(format!("{} is invalid", "name"));
        assert!(error.is_validation_failure());
        assert_eq!(error.message, "name is invalid");
    }

    #[test]
    fn test_leaf_error_is_not_engine_failure() {
        assert!(!ValidationError::new("required", "Value is required").is_validation_failure());
    }

    #[test]
    fn test_failure_message_extraction() {
        let error = ValidationError::failed("boom");
        assert_eq!(error.failure_message(), "boom");

        let io = std::io::Error::other("disk on fire");
        assert_eq!(io.failure_message(), "disk on fire");

        let boxed: Box<dyn std::error::Error + Send + Sync> = "boxed".into();
        assert_eq!(boxed.failure_message(), "boxed");
    }
}
