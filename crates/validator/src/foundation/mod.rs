//! Foundation types shared by the engines and the leaf validators
//!
//! - **Errors**: [`ValidationError`], [`FailureMessage`]
//! - **Factories**: [`ErrorFactory`], the per-scope constructor of failures
//! - **Traits**: [`Validate`] for leaf checks

pub mod error;
pub mod factory;
pub mod traits;

pub use error::{FailureMessage, VALIDATION_FAILED, ValidationError};
pub use factory::ErrorFactory;
pub use traits::Validate;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
