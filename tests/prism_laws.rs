//! Property-based tests for Prism laws.
//!
//! - **ReverseGetGet Law**: `prism.get_option_owned(prism.reverse_get(a)) == Just(a)`
//! - **GetReverseGet Law**: if `prism.get_option(&s) == Just(a)` then
//!   `prism.reverse_get(a.clone()) == s`
//!
//! A prism that misses must leave the source untouched under `modify`.

#![cfg(feature = "optics")]

use proptest::prelude::*;
use remonad::control::{Either, Maybe, RemoteData};
use remonad::optics::Prism;
use remonad::prism;

#[derive(Clone, PartialEq, Debug)]
enum Payment {
    Card(String),
    Cash(u32),
    Voucher(Maybe<u32>),
}

type Lookup = Either<String, Maybe<i32>>;

fn payment_strategy() -> impl Strategy<Value = Payment> {
    prop_oneof![
        "[0-9]{4}".prop_map(Payment::Card),
        any::<u32>().prop_map(Payment::Cash),
        any::<Option<u32>>().prop_map(|code| Payment::Voucher(Maybe::from(code))),
    ]
}

fn remote_strategy() -> impl Strategy<Value = RemoteData<String, i32>> {
    prop_oneof![
        Just(RemoteData::<String, i32>::StandBy),
        Just(RemoteData::<String, i32>::Loading),
        any::<i32>().prop_map(RemoteData::Success),
        "[a-z]{0,6}".prop_map(RemoteData::Failure),
    ]
}

fn lookup_strategy() -> impl Strategy<Value = Lookup> {
    prop_oneof![
        "[a-z]{0,6}".prop_map(Either::Left),
        any::<Option<i32>>().prop_map(|value| Either::Right(Maybe::from(value))),
    ]
}

// =============================================================================
// Prism on a user enum
// =============================================================================

proptest! {
    #[test]
    fn prop_cash_reverse_get_get_law(amount in any::<u32>()) {
        let cash = prism!(Payment, Cash);
        prop_assert_eq!(cash.get_option_owned(cash.reverse_get(amount)), Maybe::Just(amount));
    }

    #[test]
    fn prop_cash_get_reverse_get_law(payment in payment_strategy()) {
        let cash = prism!(Payment, Cash);
        if let Maybe::Just(amount) = cash.get_option(&payment) {
            prop_assert_eq!(cash.reverse_get(*amount), payment);
        }
    }

    #[test]
    fn prop_modify_on_miss_is_identity(payment in payment_strategy()) {
        let card = prism!(Payment, Card);
        let masked = card.modify(payment.clone(), |_| "****".to_string());
        match payment {
            Payment::Card(_) => {
                prop_assert_eq!(masked, Payment::Card("****".to_string()));
            }
            other => {
                prop_assert_eq!(masked, other);
            }
        }
    }

    #[test]
    fn prop_modify_option_agrees_with_get_option(payment in payment_strategy()) {
        let voucher = prism!(Payment, Voucher);
        let present = voucher.get_option(&payment).is_just();
        prop_assert_eq!(voucher.modify_option(payment, |code| code).is_just(), present);
    }
}

// =============================================================================
// Prism on a library container
// =============================================================================

proptest! {
    #[test]
    fn prop_success_laws(state in remote_strategy(), value in any::<i32>()) {
        let success = prism!(RemoteData<String, i32>, Success);

        prop_assert_eq!(success.get_option_owned(success.reverse_get(value)), Maybe::Just(value));
        if let Maybe::Just(data) = success.get_option(&state) {
            prop_assert_eq!(success.reverse_get(*data), state.clone());
        }
        prop_assert_eq!(success.get_option(&state).is_just(), state.is_success());
    }
}

// =============================================================================
// Composed prism
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_reverse_get_get_law(value in any::<i32>()) {
        let found = prism!(Lookup, Right).compose(prism!(Maybe<i32>, Just));
        let built = found.reverse_get(value);

        prop_assert_eq!(&built, &Either::Right(Maybe::Just(value)));
        prop_assert_eq!(found.get_option_owned(built), Maybe::Just(value));
    }

    #[test]
    fn prop_composed_get_reverse_get_law(lookup in lookup_strategy()) {
        let found = prism!(Lookup, Right).compose(prism!(Maybe<i32>, Just));
        if let Maybe::Just(value) = found.get_option(&lookup) {
            prop_assert_eq!(found.reverse_get(*value), lookup);
        }
    }

    #[test]
    fn prop_composed_matches_only_nested_success(lookup in lookup_strategy()) {
        let found = prism!(Lookup, Right).compose(prism!(Maybe<i32>, Just));
        let expected = matches!(lookup, Either::Right(Maybe::Just(_)));
        prop_assert_eq!(found.get_option(&lookup).is_just(), expected);
    }
}
