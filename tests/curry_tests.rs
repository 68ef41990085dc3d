//! Integration tests for the curry macros and function helpers.

#![cfg(all(feature = "compose", feature = "control"))]

use remonad::compose::{constant, flip, identity};
use remonad::control::{Either, Maybe, RemoteData, Result};
use remonad::{curry2, curry3, curry4, curry5, curry6};
use rstest::rstest;

fn join_words(first: String, second: String, third: String, fourth: String) -> String {
    [first, second, third, fourth].join(" ")
}

#[rstest]
fn test_partial_application_is_reusable() {
    let add = curry2!(|a: i32, b: i32| a + b);
    let add_ten = add(10);

    assert_eq!(add_ten(1), 11);
    assert_eq!(add_ten(2), 12);
    assert_eq!(add(0)(0), 0);
}

#[rstest]
fn test_curry4_with_function_item_and_owned_arguments() {
    let sentence = curry4!(join_words);
    let greeting = sentence("hello".to_string())("curried".to_string());

    assert_eq!(
        greeting("rust".to_string())("world".to_string()),
        "hello curried rust world"
    );
    assert_eq!(
        greeting("again".to_string())("!".to_string()),
        "hello curried again !"
    );
}

#[rstest]
#[case(1, 2, 3, 4, 5, 15)]
#[case(0, 0, 0, 0, 10, 10)]
fn test_curry5(
    #[case] a: i64,
    #[case] b: i64,
    #[case] c: i64,
    #[case] d: i64,
    #[case] e: i64,
    #[case] expected: i64,
) {
    let sum = curry5!(|a: i64, b: i64, c: i64, d: i64, e: i64| a + b + c + d + e);
    assert_eq!(sum(a)(b)(c)(d)(e), expected);
}

#[rstest]
fn test_curry6_through_result_apply() {
    let tuple6 = curry6!(|a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| [a, b, c, d, e, f]);

    let collected: Result<&str, [u8; 6]> = Result::Ok(tuple6)
        .apply(Result::Ok(1))
        .apply(Result::Ok(2))
        .apply(Result::Ok(3))
        .apply(Result::Ok(4))
        .apply(Result::Ok(5))
        .apply(Result::Ok(6));

    assert_eq!(collected, Result::Ok([1, 2, 3, 4, 5, 6]));
}

#[rstest]
fn test_same_curried_function_across_containers() {
    let clamp = curry3!(|low: i32, high: i32, value: i32| value.clamp(low, high));

    let maybe = Maybe::Just(clamp.clone())
        .apply(Maybe::Just(0))
        .apply(Maybe::Just(10))
        .apply(Maybe::Just(42));
    let either = Either::<(), _>::Right(clamp.clone())
        .apply(Either::Right(0))
        .apply(Either::Right(10))
        .apply(Either::Right(-3));
    let remote = RemoteData::<(), _>::Success(clamp)
        .apply(RemoteData::Success(0))
        .apply(RemoteData::Loading)
        .apply(RemoteData::Success(5));

    assert_eq!(maybe, Maybe::Just(10));
    assert_eq!(either, Either::Right(0));
    assert_eq!(remote, RemoteData::Loading);
}

#[rstest]
fn test_curried_function_crosses_threads() {
    let scale = curry2!(|factor: i32, value: i32| factor * value);
    let triple = scale(3);

    let handle = std::thread::spawn(move || triple(14));
    assert_eq!(handle.join().ok(), Some(42));
}

#[rstest]
fn test_helpers() {
    let subtract = |a: i32, b: i32| a - b;

    assert_eq!(identity(5), 5);
    assert_eq!(Maybe::Just(1).map(constant("x")), Maybe::Just("x"));
    assert_eq!(flip(subtract)(1, 10), 9);
    assert_eq!(Maybe::Just(Maybe::Just(2)).chain(identity), Maybe::Just(2));
}
