//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//! ```

pub use crate::dsl::{validate, validate_async, validate_async_with, validate_with};
pub use crate::engine::{AsyncValidator, Validator};
pub use crate::foundation::{ErrorFactory, FailureMessage, Validate, ValidationError};
#[cfg(feature = "stream")]
pub use crate::stream::{ValidateFutureExt, ValidateStreamExt};
pub use crate::validators::{Blank, Collection, Nullable};
