//! Pluggable construction of failure values.

use std::fmt;
use std::sync::Arc;

use super::ValidationError;

/// Builds the failure value for a message.
///
/// Every engine scope owns exactly one factory. Nested scopes receive a clone
/// of the enclosing scope's factory at the moment they are created, so an
/// override made with `use_exception` flows downward but never back up.
///
/// Cloning is an `Arc` bump; the closure itself is shared.
///
/// # Examples
///
/// ```rust,ignore
/// use chainval::foundation::ErrorFactory;
///
/// #[derive(Debug)]
/// struct Rejected(String);
///
/// let factory = ErrorFactory::new(|message| Rejected(message));
/// let error = factory.create("nope");
/// ```
pub struct ErrorFactory<E> {
    create: Arc<dyn Fn(String) -> E + Send + Sync>,
}

impl<E> ErrorFactory<E> {
    /// Wraps a closure as a factory.
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        Self {
            create: Arc::new(create),
        }
    }

    /// Builds a failure carrying `message`.
    pub fn create(&self, message: impl Into<String>) -> E {
        (self.create)(message.into())
    }
}

impl<E> ErrorFactory<E>
where
    E: From<ValidationError>,
{
    /// The default factory: a [`ValidationError`] with the message verbatim,
    /// converted into `E`.
    #[must_use]
    pub fn validation_failed() -> Self {
        Self::new(|message| E::from(ValidationError::failed(message)))
    }
}

impl<E> Clone for ErrorFactory<E> {
    fn clone(&self) -> Self {
        Self {
            create: Arc::clone(&self.create),
        }
    }
}

impl<E> Default for ErrorFactory<E>
where
    E: From<ValidationError>,
{
    fn default() -> Self {
        Self::validation_failed()
    }
}

impl<E> fmt::Debug for ErrorFactory<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorFactory")
            .field("error", &std::any::type_name::<E>())
            .finish()
    }
}
