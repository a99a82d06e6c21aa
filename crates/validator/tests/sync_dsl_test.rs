//! Immediate validation blocks through the public entry points.

use chainval::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::cell::RefCell;

#[derive(Debug, PartialEq)]
enum ApiError {
    BadRequest(String),
    Conflict(String),
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::BadRequest(error.message.into_owned())
    }
}

#[rstest]
#[case(true, true)]
#[case(false, false)]
fn is_true_passes_only_on_true(#[case] assertion: bool, #[case] passes: bool) {
    let result = validate(|v| {
        v.is_true(assertion, || "Should throw")?;
        Ok(())
    });
    assert_eq!(result.is_ok(), passes);
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
fn is_false_passes_only_on_false(#[case] assertion: bool, #[case] passes: bool) {
    let result = validate(|v| {
        v.is_false(assertion, || "Should throw")?;
        Ok(())
    });
    assert_eq!(result.is_ok(), passes);
}

#[rstest]
#[case("   ", false)]
#[case("", false)]
#[case("ok", true)]
fn is_not_blank(#[case] value: &str, #[case] passes: bool) {
    let result = validate(|v| {
        v.is_not_blank(value, || "blank")?;
        Ok(())
    });
    match result {
        Ok(_) => assert!(passes),
        Err(error) => {
            assert!(!passes);
            assert_eq!(error, ValidationError::failed("blank"));
        }
    }
}

#[test]
fn is_not_null_and_is_not_empty() {
    let present: Option<&str> = Some("x");
    let absent: Option<&str> = None;

    assert!(
        validate(|v| {
            v.is_not_null(&present, || "null")?
                .is_not_empty(&vec![1, 2], || "empty")?;
            Ok(())
        })
        .is_ok()
    );

    let error = validate(|v| {
        v.is_not_null(&absent, || "null")?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(error.message, "null");

    let error = validate(|v| {
        v.is_not_empty(&Vec::<i32>::new(), || "empty")?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(error.message, "empty");
}

#[test]
fn first_failure_wins_and_later_assertions_never_run() {
    let messages = RefCell::new(Vec::new());
    let log = &messages;
    let message = move |text: &'static str| {
        move || {
            log.borrow_mut().push(text);
            text
        }
    };

    let error = validate(|v| {
        v.is_true(true, message("one"))?
            .is_true(false, message("two"))?
            .is_true(false, message("three"))?;
        Ok(())
    })
    .unwrap_err();

    assert_eq!(error.message, "two");
    assert_eq!(*messages.borrow(), vec!["two"]);
}

#[test]
fn unless_skips_when_predicate_holds() {
    let result = validate(|v| {
        v.unless(true, |v| {
            v.is_true(false, || "Should not throw")?;
            Ok(())
        })?;
        Ok(())
    });
    assert!(result.is_ok());
}

#[test]
fn unless_runs_when_predicate_fails() {
    let result = validate(|v| {
        v.unless(false, |v| {
            v.is_true(false, || "Should throw")?;
            Ok(())
        })?;
        Ok(())
    });
    assert_eq!(result.unwrap_err().message, "Should throw");
}

#[test]
fn fail_raises_with_message() {
    let error = validate(|v| {
        v.fail(|| "Always fails")?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(error, ValidationError::failed("Always fails"));
}

#[test]
fn use_exception_switches_failure_type_for_following_assertions() {
    let error = validate_with(ErrorFactory::<ApiError>::default(), |v| {
        v.is_true(true, || "fine")?;
        v.use_exception(ApiError::Conflict);
        v.unless(false, |v| {
            v.is_not_blank("", || "name taken")?;
            Ok(())
        })?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(error, ApiError::Conflict("name taken".into()));
}

#[test]
fn default_factory_converts_into_caller_error() {
    let error = validate_with(ErrorFactory::<ApiError>::default(), |v| {
        v.is_not_empty(&[0u8; 0], || "no items")?;
        Ok(())
    })
    .unwrap_err();
    assert_eq!(error, ApiError::BadRequest("no items".into()));
}
