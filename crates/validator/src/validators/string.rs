//! String content validators

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Text that can be blank: absent, empty, or whitespace only.
///
/// Whitespace follows [`char::is_whitespace`].
pub trait Blank {
    /// Returns true when there is no non-whitespace character.
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl Blank for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_blank()
    }
}

impl<T> Blank for Option<T>
where
    T: Blank,
{
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T> Blank for &T
where
    T: Blank + ?Sized,
{
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

/// Validates that text is not [`Blank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotBlank;

impl NotBlank {
    /// Checks any [`Blank`] value, not only `str`.
    pub fn check<S>(&self, input: &S) -> Result<(), ValidationError>
    where
        S: Blank + ?Sized,
    {
        if input.is_blank() {
            Err(ValidationError::new("not_blank", "Value must not be blank"))
        } else {
            Ok(())
        }
    }
}

impl Validate for NotBlank {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        self.check(input)
    }
}

/// Creates a [`NotBlank`] validator.
#[must_use]
pub const fn not_blank() -> NotBlank {
    NotBlank
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("\t\n", true)]
    #[case("\u{2003}", true)]
    #[case("ok", false)]
    #[case("  ok  ", false)]
    fn test_blank(#[case] input: &str, #[case] blank: bool) {
        assert_eq!(input.is_blank(), blank);
        assert_eq!(not_blank().validate(input).is_err(), blank);
    }

    #[test]
    fn test_option_none_is_blank() {
        assert!(None::<String>.is_blank());
        assert!(Some(" ".to_string()).is_blank());
        assert!(!Some("x").is_blank());
    }

    #[test]
    fn test_check_non_str() {
        let error = not_blank().check(&String::from(" ")).unwrap_err();
        assert_eq!(error.code, "not_blank");
    }
}
