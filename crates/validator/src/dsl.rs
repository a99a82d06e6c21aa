//! Entry points for validation blocks
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! // Immediate: returns on the first failure.
//! validate(|v| {
//!     v.is_not_blank(&name, || "name must not be blank")?;
//!     Ok(())
//! })?;
//!
//! // Deferred: the block only declares, the returned future evaluates.
//! validate_async(|v| {
//!     v.is_false(users.exists(name.clone()), || "name already taken");
//! })
//! .await?;
//! ```

use std::future::Future;

use crate::engine::{AsyncValidator, Validator};
use crate::foundation::{ErrorFactory, ValidationError};

/// Runs a block of immediate assertions.
///
/// Returns the scope on success so callers can keep asserting against it,
/// or the first failure.
pub fn validate<F>(block: F) -> Result<Validator, ValidationError>
where
    F: FnOnce(&mut Validator) -> Result<(), ValidationError>,
{
    validate_with(ErrorFactory::validation_failed(), block)
}

/// Like [`validate`], with failures built by `factory`.
pub fn validate_with<E, F>(factory: ErrorFactory<E>, block: F) -> Result<Validator<E>, E>
where
    F: FnOnce(&mut Validator<E>) -> Result<(), E>,
{
    let mut validator = Validator::with_factory(factory);
    block(&mut validator)?;
    Ok(validator)
}

/// Declares a block of deferred assertions and returns the future that
/// evaluates them.
///
/// `block` runs before this function returns but only records tasks; no
/// assertion runs until the returned future is polled.
pub fn validate_async<'a, F>(block: F) -> impl Future<Output = Result<(), ValidationError>> + Send + 'a
where
    F: FnOnce(&mut AsyncValidator<'a>),
{
    validate_async_with(ErrorFactory::validation_failed(), block)
}

/// Like [`validate_async`], with failures built by `factory`.
pub fn validate_async_with<'a, E, F>(
    factory: ErrorFactory<E>,
    block: F,
) -> impl Future<Output = Result<(), E>> + Send + 'a
where
    E: Send + 'a,
    F: FnOnce(&mut AsyncValidator<'a, E>),
{
    let mut validator = AsyncValidator::with_factory(factory);
    block(&mut validator);
    validator.run()
}
