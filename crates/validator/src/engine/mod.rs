//! Validation engines
//!
//! - [`Validator`] evaluates assertions immediately, failing on the first one
//!   that does not hold.
//! - [`AsyncValidator`] records assertions as deferred tasks and evaluates
//!   them in declaration order when [`AsyncValidator::run`] is awaited.
//!
//! Both share the scope model: an ordered block of assertions plus one
//! [`ErrorFactory`](crate::foundation::ErrorFactory), copied into every
//! nested scope at the moment the nested scope is created.

mod async_engine;
mod sync;
mod task;

pub use async_engine::AsyncValidator;
pub use sync::Validator;
