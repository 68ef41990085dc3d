//! Integration tests for Result.

#![cfg(feature = "control")]

use std::cell::Cell;

use remonad::control::{Either, Maybe, RemoteData, Result};
use remonad::curry3;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
enum FormError {
    Empty(&'static str),
    TooLong { field: &'static str, max: usize },
}

fn field(name: &'static str, value: &str, max: usize) -> Result<FormError, String> {
    if value.is_empty() {
        Result::Err(FormError::Empty(name))
    } else if value.len() > max {
        Result::Err(FormError::TooLong { field: name, max })
    } else {
        Result::Ok(value.to_string())
    }
}

#[derive(Debug, PartialEq)]
struct Signup {
    user: String,
    email: String,
    city: String,
}

fn signup(user: &str, email: &str, city: &str) -> Result<FormError, Signup> {
    let build = curry3!(|user: String, email: String, city: String| Signup { user, email, city });
    Result::Ok(build)
        .apply(field("user", user, 8))
        .apply(field("email", email, 32))
        .apply(field("city", city, 16))
}

// =============================================================================
// Applicative validation
// =============================================================================

#[rstest]
fn test_apply_builds_value_when_all_fields_valid() {
    assert_eq!(
        signup("ada", "ada@example.com", "London"),
        Result::Ok(Signup {
            user: "ada".into(),
            email: "ada@example.com".into(),
            city: "London".into(),
        })
    );
}

#[rstest]
#[case("", "", "", FormError::Empty("user"))]
#[case("ada", "", "", FormError::Empty("email"))]
#[case("a-very-long-name", "", "x", FormError::TooLong { field: "user", max: 8 })]
fn test_apply_reports_first_error(
    #[case] user: &str,
    #[case] email: &str,
    #[case] city: &str,
    #[case] expected: FormError,
) {
    assert_eq!(signup(user, email, city), Result::Err(expected));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_map_on_err_never_calls_function() {
    let calls = Cell::new(0);
    let failed: Result<&str, i32> = Result::Err("e");
    let mapped = failed.map(|n| {
        calls.set(calls.get() + 1);
        n
    });
    assert_eq!(mapped, Result::Err("e"));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_map_error_and_map_both() {
    let failed: Result<&str, i32> = Result::Err("bad");
    assert_eq!(failed.map_error(str::len), Result::Err(3));
    assert_eq!(
        Result::<&str, i32>::Ok(2).map_both(str::len, |n| n * 10),
        Result::Ok(20)
    );
}

#[rstest]
fn test_chain_then_fold() {
    let half = |n: i32| {
        if n % 2 == 0 {
            Result::Ok(n / 2)
        } else {
            Result::Err(format!("{n} is odd"))
        }
    };

    let describe = |start: i32| {
        Result::Ok(start)
            .chain(half)
            .chain(half)
            .fold(|n| format!("ok {n}"), |error| format!("err {error}"))
    };

    assert_eq!(describe(12), "ok 3");
    assert_eq!(describe(6), "err 3 is odd");
}

#[rstest]
#[case(Result::Ok(1), Result::Ok(2), Result::Ok(1), Result::Ok(2))]
#[case(Result::Err("a"), Result::Ok(2), Result::Ok(2), Result::Ok(2))]
#[case(Result::Err("a"), Result::Err("b"), Result::Err("a"), Result::Err("b"))]
fn test_or_bias(
    #[case] receiver: Result<&'static str, i32>,
    #[case] other: Result<&'static str, i32>,
    #[case] or_expected: Result<&'static str, i32>,
    #[case] or_else_expected: Result<&'static str, i32>,
) {
    assert_eq!(receiver.or(other), or_expected);
    assert_eq!(receiver.or_else(other), or_else_expected);
}

#[rstest]
fn test_join() {
    let nested: Result<&str, Result<&str, i32>> = Result::Ok(Result::Err("inner"));
    assert_eq!(nested.join(), Result::Err("inner"));
}

// =============================================================================
// Conversion
// =============================================================================

#[rstest]
fn test_conversions() {
    let ok: Result<&str, i32> = Result::Ok(5);
    let err: Result<&str, i32> = Result::Err("e");

    assert_eq!(ok.to_maybe(), Maybe::Just(5));
    assert_eq!(err.to_maybe(), Maybe::Nothing);
    assert_eq!(err.to_either(), Either::Left("e"));
    assert_eq!(err.get_error(), Maybe::Just("e"));
    assert_eq!(RemoteData::from_result(err), RemoteData::Failure("e"));
    assert_eq!(Result::from(Either::<&str, i32>::Right(1)), Result::Ok(1));
}

#[rstest]
fn test_question_mark_through_into_std() {
    fn total(values: &[Result<String, u32>]) -> std::result::Result<u32, String> {
        let mut sum = 0;
        for value in values {
            sum += value.clone().into_std()?;
        }
        Ok(sum)
    }

    assert_eq!(total(&[Result::Ok(1), Result::Ok(2)]), Ok(3));
    assert_eq!(
        total(&[Result::Ok(1), Result::Err("stop".into()), Result::Err("later".into())]),
        Err("stop".to_string())
    );
}
