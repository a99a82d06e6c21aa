//! Deferred validation scope
//!
//! [`AsyncValidator`] records assertions instead of running them. Each
//! declaration appends a task that captures its inputs and the factory
//! active at declaration time. [`AsyncValidator::run`] then invokes the
//! tasks in declaration order, one at a time, and stops at the first
//! failure.
//!
//! Futures handed to the declaring methods are not polled until their task
//! runs, and the block of a skipped `unless` is never even called, so work
//! that is skipped causes no side effects.
//!
//! # Examples
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! validate_async(|v| {
//!     v.is_false(repo.email_taken(email.clone()), || "email already registered");
//!     v.unless(invited, |v| {
//!         v.succeeds(captcha.verify(token.clone()));
//!     });
//!     v.synchronous(|v| {
//!         v.is_not_blank(&email, || "email must not be blank")?;
//!         Ok(())
//!     });
//! })
//! .await?;
//! ```

use std::fmt;
use std::future::Future;

use futures::FutureExt;

use super::sync::Validator;
use super::task::TaskQueue;
use crate::foundation::{ErrorFactory, FailureMessage, ValidationError};

/// A deferred validation scope.
///
/// `'a` bounds everything the declared tasks borrow; use `'static` when the
/// validation has to outlive the current stack frame (e.g. inside a stream
/// adapter).
pub struct AsyncValidator<'a, E = ValidationError> {
    tasks: TaskQueue<'a, E>,
    factory: ErrorFactory<E>,
}

impl AsyncValidator<'_> {
    /// Creates a scope raising [`ValidationError`]s.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a, E> Default for AsyncValidator<'a, E>
where
    E: From<ValidationError> + Send + 'a,
{
    fn default() -> Self {
        Self::with_factory(ErrorFactory::validation_failed())
    }
}

impl<'a, E> AsyncValidator<'a, E>
where
    E: Send + 'a,
{
    /// Creates a scope that builds failures with `factory`.
    #[must_use]
    pub fn with_factory(factory: ErrorFactory<E>) -> Self {
        Self {
            tasks: TaskQueue::new(),
            factory,
        }
    }

    /// Number of tasks declared so far.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true when nothing has been declared.
    pub fn is_empty(&self) -> bool {
        self.tasks.len() == 0
    }

    /// Replaces the error factory for tasks declared after this call.
    ///
    /// Tasks already declared keep the factory they captured.
    pub fn use_exception<F>(&mut self, create: F) -> &mut Self
    where
        F: Fn(String) -> E + Send + Sync + 'static,
    {
        self.factory = ErrorFactory::new(create);
        self
    }

    /// Declares that `assertion` resolves to `true`.
    ///
    /// An `Err` from `assertion` becomes the task's failure unchanged.
    pub fn is_true<Fut, M, S>(&mut self, assertion: Fut, message: M) -> &mut Self
    where
        Fut: Future<Output = Result<bool, E>> + Send + 'a,
        M: FnOnce() -> S + Send + 'a,
        S: Into<String>,
    {
        self.expect(assertion, true, message)
    }

    /// Declares that `assertion` resolves to `false`.
    ///
    /// An `Err` from `assertion` becomes the task's failure unchanged.
    pub fn is_false<Fut, M, S>(&mut self, assertion: Fut, message: M) -> &mut Self
    where
        Fut: Future<Output = Result<bool, E>> + Send + 'a,
        M: FnOnce() -> S + Send + 'a,
        S: Into<String>,
    {
        self.expect(assertion, false, message)
    }

    /// Declares that `operation` completes without error; its value is ignored.
    ///
    /// On error, the failure is rebuilt by this scope's factory from the
    /// upstream error's message text. The upstream error value itself is
    /// dropped, so a custom factory never sees its type.
    pub fn succeeds<Fut, T, X>(&mut self, operation: Fut) -> &mut Self
    where
        Fut: Future<Output = Result<T, X>> + Send + 'a,
        X: FailureMessage,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            async move {
                match operation.await {
                    Ok(_) => Ok(()),
                    Err(error) => Err(factory.create(error.failure_message().into_owned())),
                }
            }
            .boxed()
        });
        self
    }

    /// Declares that `operation` completes without error, failing with
    /// `message` instead of the upstream error's text.
    pub fn succeeds_with<Fut, T, X, M, S>(&mut self, operation: Fut, message: M) -> &mut Self
    where
        Fut: Future<Output = Result<T, X>> + Send + 'a,
        M: FnOnce() -> S + Send + 'a,
        S: Into<String>,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            async move {
                match operation.await {
                    Ok(_) => Ok(()),
                    Err(_) => Err(factory.create(message())),
                }
            }
            .boxed()
        });
        self
    }

    /// Declares `validation` as a nested scope, skipped when `predicate` is `true`.
    ///
    /// The block runs when the task runs, not now. It declares into a fresh
    /// scope that starts with this scope's current factory; the nested scope
    /// is then run to completion and its outcome becomes this task's outcome.
    pub fn unless<F>(&mut self, predicate: bool, validation: F) -> &mut Self
    where
        F: FnOnce(&mut AsyncValidator<'a, E>) + Send + 'a,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            if predicate {
                tracing::trace!("unless predicate held, skipping nested validation");
                return futures::future::ready(Ok(())).boxed();
            }
            Self::nested_run(factory, validation).boxed()
        });
        self
    }

    /// Like [`unless`](Self::unless), but the predicate is awaited first.
    ///
    /// An `Err` from `predicate` becomes the task's failure unchanged and the
    /// block is not called.
    pub fn unless_async<Fut, F>(&mut self, predicate: Fut, validation: F) -> &mut Self
    where
        Fut: Future<Output = Result<bool, E>> + Send + 'a,
        F: FnOnce(&mut AsyncValidator<'a, E>) + Send + 'a,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            async move {
                if predicate.await? {
                    tracing::trace!("unless predicate resolved true, skipping nested validation");
                    return Ok(());
                }
                Self::nested_run(factory, validation).await
            }
            .boxed()
        });
        self
    }

    /// Declares a block of immediate assertions.
    ///
    /// The block is not called now. When the task runs, it gets a
    /// [`Validator`] carrying this scope's current factory and its assertions
    /// execute on the spot; the first failure becomes the task's failure.
    pub fn synchronous<F>(&mut self, validation: F) -> &mut Self
    where
        F: FnOnce(&mut Validator<E>) -> Result<(), E> + Send + 'a,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            let mut validator = Validator::with_factory(factory);
            futures::future::ready(validation(&mut validator)).boxed()
        });
        self
    }

    /// Runs the declared tasks in order and resolves to the first failure,
    /// or `Ok(())` when every task succeeds.
    ///
    /// Tasks after the first failure are never invoked. Consuming `self`
    /// closes the scope: nothing can be declared once running starts.
    #[tracing::instrument(name = "async_validation", skip_all, fields(tasks = self.tasks.len()))]
    pub async fn run(self) -> Result<(), E> {
        self.tasks.drain().await
    }

    fn expect<Fut, M, S>(&mut self, assertion: Fut, expected: bool, message: M) -> &mut Self
    where
        Fut: Future<Output = Result<bool, E>> + Send + 'a,
        M: FnOnce() -> S + Send + 'a,
        S: Into<String>,
    {
        let factory = self.factory.clone();
        self.tasks.push(move || {
            async move {
                if assertion.await? == expected {
                    Ok(())
                } else {
                    Err(factory.create(message()))
                }
            }
            .boxed()
        });
        self
    }

    async fn nested_run<F>(factory: ErrorFactory<E>, validation: F) -> Result<(), E>
    where
        F: FnOnce(&mut AsyncValidator<'a, E>),
    {
        let mut nested = AsyncValidator::with_factory(factory);
        validation(&mut nested);
        nested.run().await
    }
}

impl<E> fmt::Debug for AsyncValidator<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncValidator")
            .field("tasks", &self.tasks.len())
            .field("factory", &self.factory)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
