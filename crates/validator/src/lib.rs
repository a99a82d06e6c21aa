//! # chainval
//!
//! Fluent validation blocks with fail-fast semantics, in two flavours:
//!
//! - [`Validator`](engine::Validator) evaluates each assertion as soon as it
//!   is called.
//! - [`AsyncValidator`](engine::AsyncValidator) records assertions, some of
//!   them backed by futures, and evaluates them one at a time, in
//!   declaration order, when run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chainval::prelude::*;
//!
//! validate(|v| {
//!     v.is_not_blank(&name, || "name must not be blank")?
//!         .is_not_empty(&roles, || "at least one role is required")?;
//!     Ok(())
//! })?;
//!
//! validate_async(|v| {
//!     v.is_false(accounts.exists(name.clone()), || format!("{name} is taken"));
//!     v.unless(is_admin, |v| {
//!         v.succeeds(quota.reserve(name.clone()));
//!     });
//! })
//! .await?;
//! ```
//!
//! ## Custom failures
//!
//! Every scope builds its failures with an
//! [`ErrorFactory`](foundation::ErrorFactory). The default produces a
//! [`ValidationError`](foundation::ValidationError); `use_exception` swaps it
//! for the rest of the scope and every scope nested afterwards.

// Closure-heavy generic signatures for the deferred task queue.
#![allow(clippy::type_complexity)]

pub mod dsl;
pub mod engine;
pub mod foundation;
pub mod prelude;
#[cfg(feature = "stream")]
pub mod stream;
pub mod validators;

pub use dsl::{validate, validate_async, validate_async_with, validate_with};
