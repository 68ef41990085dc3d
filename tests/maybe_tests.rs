//! Integration tests for Maybe.

#![cfg(feature = "control")]

use std::cell::Cell;

use remonad::control::{Either, Maybe, Result};
use remonad::curry3;
use rstest::rstest;

// =============================================================================
// Conversion boundary
// =============================================================================

#[rstest]
fn test_from_nullable_drops_present_null() {
    let value = Maybe::from_nullable(Some(None::<i32>))
        .map(|x| x + 1)
        .get_or_else(0);
    assert_eq!(value, 0);
}

#[rstest]
fn test_from_optional_keeps_present_null() {
    let value = Maybe::from_optional(Some(None::<i32>))
        .map(|x| x)
        .get_or_else(Some(0));
    assert_eq!(value, None);
}

#[rstest]
#[case(f64::NAN, Maybe::Nothing)]
#[case(f64::INFINITY, Maybe::Just(f64::INFINITY))]
#[case(1.5, Maybe::Just(1.5))]
fn test_from_number(#[case] input: f64, #[case] expected: Maybe<f64>) {
    assert_eq!(Maybe::from_number(input), expected);
}

#[rstest]
#[case(f64::NAN, Maybe::Nothing)]
#[case(f64::NEG_INFINITY, Maybe::Nothing)]
#[case(-0.25, Maybe::Just(-0.25))]
fn test_from_finite(#[case] input: f64, #[case] expected: Maybe<f64>) {
    assert_eq!(Maybe::from_finite(input), expected);
}

#[rstest]
fn test_get_returns_plain_option() {
    assert_eq!(Maybe::Just("a").get(), Some("a"));
    assert_eq!(Maybe::<&str>::Nothing.get(), None);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_map_on_nothing_never_calls_function() {
    let calls = Cell::new(0);
    let result = Maybe::<i32>::Nothing.map(|value| {
        calls.set(calls.get() + 1);
        value
    });

    assert_eq!(result, Maybe::Nothing);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn test_chain_threads_lookups() {
    let users = [("ada", 1), ("bob", 2)];
    let roles = [(1, "admin")];

    let role_of = |name: &str| {
        Maybe::find(users, |(user, _)| *user == name)
            .chain(|(_, id)| Maybe::find(roles, |(role_id, _)| *role_id == id))
            .map(|(_, role)| role)
    };

    assert_eq!(role_of("ada"), Maybe::Just("admin"));
    assert_eq!(role_of("bob"), Maybe::Nothing);
    assert_eq!(role_of("eve"), Maybe::Nothing);
}

#[rstest]
#[case(Maybe::Just(1), Maybe::Just(2), Maybe::Just(1), Maybe::Just(2))]
#[case(Maybe::Nothing, Maybe::Just(2), Maybe::Just(2), Maybe::Just(2))]
#[case(Maybe::Just(1), Maybe::Nothing, Maybe::Just(1), Maybe::Just(1))]
#[case(Maybe::Nothing, Maybe::Nothing, Maybe::Nothing, Maybe::Nothing)]
fn test_or_bias(
    #[case] left: Maybe<i32>,
    #[case] right: Maybe<i32>,
    #[case] or_expected: Maybe<i32>,
    #[case] or_else_expected: Maybe<i32>,
) {
    assert_eq!(left.or(right), or_expected);
    assert_eq!(left.or_else(right), or_else_expected);
}

#[rstest]
fn test_with_default_only_fills_nothing() {
    assert_eq!(Maybe::Nothing.with_default(5), Maybe::Just(5));
    assert_eq!(Maybe::Just(1).with_default(5), Maybe::Just(1));
}

#[rstest]
fn test_join_is_chain_identity() {
    assert_eq!(Maybe::Just(Maybe::Just(3)).join(), Maybe::Just(3));
    assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).join(), Maybe::Nothing);
    assert_eq!(Maybe::<Maybe<i32>>::Nothing.join(), Maybe::Nothing);
}

#[rstest]
fn test_apply_with_curried_function() {
    let volume = curry3!(|w: u32, h: u32, d: u32| w * h * d);

    let full = Maybe::Just(volume.clone())
        .apply(Maybe::Just(2))
        .apply(Maybe::Just(3))
        .apply(Maybe::Just(4));
    assert_eq!(full, Maybe::Just(24));

    let missing = Maybe::Just(volume)
        .apply(Maybe::Just(2))
        .apply(Maybe::Nothing)
        .apply(Maybe::Just(4));
    assert_eq!(missing, Maybe::Nothing);
}

#[rstest]
fn test_cross_container_conversions() {
    assert_eq!(Maybe::Just(1).to_result("none"), Result::Ok(1));
    assert_eq!(Maybe::<i32>::Nothing.to_result("none"), Result::Err("none"));
    assert_eq!(Maybe::<i32>::Nothing.to_either('x'), Either::Left('x'));
}

#[rstest]
#[case(vec![4, 5, 6], 1, Maybe::Just(5))]
#[case(vec![4, 5, 6], 3, Maybe::Nothing)]
#[case(vec![], 0, Maybe::Nothing)]
fn test_nth(#[case] items: Vec<i32>, #[case] index: usize, #[case] expected: Maybe<i32>) {
    assert_eq!(Maybe::nth(items, index), expected);
}

#[rstest]
fn test_first_and_last() {
    assert_eq!(Maybe::first("abc".chars()), Maybe::Just('a'));
    assert_eq!(Maybe::last("abc".chars()), Maybe::Just('c'));
    assert_eq!(Maybe::last("".chars()), Maybe::Nothing);
}

#[rstest]
fn test_fold_and_filter() {
    let label = |m: Maybe<i32>| m.filter(|n| *n > 0).fold(|n| n.to_string(), || "-".to_string());
    assert_eq!(label(Maybe::Just(3)), "3");
    assert_eq!(label(Maybe::Just(-3)), "-");
    assert_eq!(label(Maybe::Nothing), "-");
}
