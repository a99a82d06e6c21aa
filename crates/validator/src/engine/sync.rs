//! Immediate validation scope
//!
//! [`Validator`] runs every assertion the moment it is called. A failing
//! assertion returns `Err` built by the scope's [`ErrorFactory`]; with `?`
//! that ends the block, so later assertions never run.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! validate(|v| {
//!     v.is_not_blank(&user.name, || "name must not be blank")?
//!         .is_not_empty(&user.roles, || "user needs a role")?
//!         .unless(user.is_admin, |v| {
//!             v.is_true(user.age >= 18, || format!("{} is too young", user.name))?;
//!             Ok(())
//!         })?;
//!     Ok(())
//! })?;
//! ```

use std::convert::Infallible;

use crate::foundation::{ErrorFactory, Validate, ValidationError};
use crate::validators::{
    Blank, Collection, Nullable, is_false, is_true, not_blank, not_empty, not_null,
};

/// A synchronous validation scope.
///
/// Every method evaluates its assertion right away and hands back the same
/// scope for chaining. The message closure is only called when the
/// assertion fails.
#[derive(Debug, Clone)]
pub struct Validator<E = ValidationError> {
    factory: ErrorFactory<E>,
}

impl Validator {
    /// Creates a scope raising [`ValidationError`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E> Default for Validator<E>
where
    E: From<ValidationError>,
{
    fn default() -> Self {
        Self::with_factory(ErrorFactory::validation_failed())
    }
}

impl<E> Validator<E> {
    /// Creates a scope that builds failures with `factory`.
    #[must_use]
    pub fn with_factory(factory: ErrorFactory<E>) -> Self {
        Self { factory }
    }

    /// The factory failures in this scope are currently built with.
    pub fn factory(&self) -> &ErrorFactory<E> {
        &self.factory
    }

    /// Replaces the error factory for every assertion made after this call.
    pub fn use_exception<F>(&mut self, create: F) -> &mut Self
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        self.factory = ErrorFactory::new(create);
        self
    }

    /// Fails when `assertion` is `false`.
    pub fn is_true<M, S>(&mut self, assertion: bool, message: M) -> Result<&mut Self, E>
    where
        M: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(&is_true(), &assertion, message)
    }

    /// Fails when `assertion` is `true`.
    pub fn is_false<M, S>(&mut self, assertion: bool, message: M) -> Result<&mut Self, E>
    where
        M: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(&is_false(), &assertion, message)
    }

    /// Fails when `value` is absent (`None` or `()`).
    pub fn is_not_null<T, M, S>(&mut self, value: &T, message: M) -> Result<&mut Self, E>
    where
        T: Nullable + ?Sized,
        M: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(&not_null::<T>(), value, message)
    }

    /// Fails when `value` is absent, empty, or whitespace only.
    pub fn is_not_blank<T, M, S>(&mut self, value: &T, message: M) -> Result<&mut Self, E>
    where
        T: Blank + ?Sized,
        M: FnOnce() -> S,
        S: Into<String>,
    {
        if not_blank().check(value).is_err() {
            return Err(self.raise(message));
        }
        Ok(self)
    }

    /// Fails when `collection` has no elements.
    pub fn is_not_empty<C, M, S>(&mut self, collection: &C, message: M) -> Result<&mut Self, E>
    where
        C: Collection + ?Sized,
        M: FnOnce() -> S,
        S: Into<String>,
    {
        self.check(&not_empty::<C>(), collection, message)
    }

    /// Runs any leaf [`Validate`] as an assertion of this scope.
    ///
    /// The leaf's own error is discarded; the failure is built from `message`
    /// by this scope's factory like every other assertion.
    pub fn check<V, M, S>(
        &mut self,
        validator: &V,
        input: &V::Input,
        message: M,
    ) -> Result<&mut Self, E>
    where
        V: Validate,
        M: FnOnce() -> S,
        S: Into<String>,
    {
        if validator.is_valid(input) {
            Ok(self)
        } else {
            Err(self.raise(message))
        }
    }

    /// Runs `validation` in a nested scope unless `predicate` is `true`.
    ///
    /// The nested scope starts with a copy of this scope's current factory.
    /// A `use_exception` inside the block stays inside the block. When
    /// `predicate` holds, the block is never called.
    pub fn unless<F>(&mut self, predicate: bool, validation: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        if !predicate {
            let mut nested = self.nested();
            validation(&mut nested)?;
        }
        Ok(self)
    }

    /// Fails unconditionally with `message`.
    ///
    /// The `Ok` side is uninhabited, so `v.fail(..)?` never continues.
    pub fn fail<M, S>(&self, message: M) -> Result<Infallible, E>
    where
        M: FnOnce() -> S,
        S: Into<String>,
    {
        Err(self.raise(message))
    }

    /// A fresh scope carrying this scope's factory.
    pub(crate) fn nested(&self) -> Self {
        Self::with_factory(self.factory.clone())
    }

    fn raise<M, S>(&self, message: M) -> E
    where
        M: FnOnce() -> S,
        S: Into<String>,
    {
        self.factory.create(message())
    }
}

// ============================================================================
// TESTS
// ============================================================================
