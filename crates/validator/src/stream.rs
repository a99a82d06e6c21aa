//! Validation adapters for futures and streams
//!
//! A validation block runs against each value once it is produced. Values
//! that pass flow through unchanged; a failing value is replaced by its
//! failure. Streams end right after the first failure, so no later element
//! is pulled or validated.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! let names = load_names() // impl Stream<Item = Result<String, ValidationError>>
//!     .validate(|v, name| {
//!         v.is_not_blank(name, || "name must not be blank")?;
//!         Ok(())
//!     });
//!
//! let user = fetch_user(id) // impl Future<Output = Result<User, ValidationError>>
//!     .validate_async(|v, user| {
//!         v.is_false(directory.is_banned(user.id), || "user is banned");
//!     })
//!     .await?;
//! ```

use std::future::Future;

use futures::{Stream, StreamExt};

use crate::engine::{AsyncValidator, Validator};
use crate::foundation::ValidationError;

// ============================================================================
// SINGLE VALUE
// ============================================================================

/// Validation adapters for a future resolving to `Result<T, E>`.
pub trait ValidateFutureExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Runs immediate assertions on the resolved value.
    fn validate<F>(self, block: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(&mut Validator<E>, &T) -> Result<(), E>,
        E: From<ValidationError>;

    /// Declares deferred assertions on the resolved value and awaits them.
    fn validate_async<F>(self, block: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(&mut AsyncValidator<'static, E>, &T),
        E: From<ValidationError> + Send + 'static;
}

impl<Fut, T, E> ValidateFutureExt<T, E> for Fut
where
    Fut: Future<Output = Result<T, E>>,
{
    fn validate<F>(self, block: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(&mut Validator<E>, &T) -> Result<(), E>,
        E: From<ValidationError>,
    {
        async move {
            let item = self.await?;
            let mut validator = Validator::default();
            block(&mut validator, &item)?;
            Ok(item)
        }
    }

    fn validate_async<F>(self, block: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(&mut AsyncValidator<'static, E>, &T),
        E: From<ValidationError> + Send + 'static,
    {
        async move {
            let item = self.await?;
            let mut validator = AsyncValidator::default();
            block(&mut validator, &item);
            validator.run().await?;
            Ok(item)
        }
    }
}

// ============================================================================
// MULTIPLE VALUES
// ============================================================================

/// Validation adapters for a stream of `Result<T, E>`.
///
/// Elements are validated one at a time, in order. An upstream `Err` passes
/// through and ends the stream just like a validation failure.
pub trait ValidateStreamExt<T, E>: Stream<Item = Result<T, E>> + Sized {
    /// Runs immediate assertions on every element.
    fn validate<F>(self, block: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&mut Validator<E>, &T) -> Result<(), E>,
        E: From<ValidationError>;

    /// Declares deferred assertions for every element and awaits them before
    /// the element is yielded.
    fn validate_async<F>(self, block: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&mut AsyncValidator<'static, E>, &T),
        E: From<ValidationError> + Send + 'static;
}

impl<St, T, E> ValidateStreamExt<T, E> for St
where
    St: Stream<Item = Result<T, E>>,
{
    fn validate<F>(self, mut block: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&mut Validator<E>, &T) -> Result<(), E>,
        E: From<ValidationError>,
    {
        fail_fast(self.map(move |item: Result<T, E>| -> Result<T, E> {
            let item = item?;
            let mut validator = Validator::default();
            block(&mut validator, &item)?;
            Ok(item)
        }))
    }

    fn validate_async<F>(self, mut block: F) -> impl Stream<Item = Result<T, E>>
    where
        F: FnMut(&mut AsyncValidator<'static, E>, &T),
        E: From<ValidationError> + Send + 'static,
    {
        fail_fast(self.then(move |item: Result<T, E>| {
            let declared = item.map(|item| {
                let mut validator = AsyncValidator::default();
                block(&mut validator, &item);
                (validator, item)
            });
            async move {
                let (validator, item) = declared?;
                validator.run().await?;
                Ok(item)
            }
        }))
    }
}

/// Ends `stream` right after its first `Err`, without polling it again.
fn fail_fast<S, T, E>(stream: S) -> impl Stream<Item = Result<T, E>>
where
    S: Stream<Item = Result<T, E>>,
{
    futures::stream::unfold(Some(Box::pin(stream)), |state| async move {
        let mut stream = state?;
        let item = stream.next().await?;
        if item.is_err() {
            tracing::debug!("validation failed, ending stream");
            return Some((item, None));
        }
        Some((item, Some(stream)))
    })
}
