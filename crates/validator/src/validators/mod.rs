//! Built-in leaf validators
//!
//! - **Boolean**: [`IsTrue`], [`IsFalse`]
//! - **Presence**: [`NotNull`] over [`Nullable`]
//! - **String**: [`NotBlank`] over [`Blank`]
//! - **Collection**: [`NotEmpty`] over [`Collection`]

pub mod boolean;
pub mod nullable;
pub mod size;
pub mod string;

pub use boolean::{IsFalse, IsTrue, is_false, is_true};
pub use nullable::{NotNull, Nullable, not_null};
pub use size::{Collection, NotEmpty, not_empty};
pub use string::{Blank, NotBlank, not_blank};
