// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Transition Function
//!
//! Arbitrary event sequences, valid or not, folded through `apply_event`.

use cim_account::aggregate::{apply_event, AccountState};
use cim_account::events::AccountEvent;
use proptest::prelude::*;

use crate::fixtures::{account_created, funds_deposited, funds_withdrawn};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Generate arbitrary account events, including ones that will not apply
fn account_event() -> impl Strategy<Value = AccountEvent> {
    prop_oneof![
        1 => (1u128..1000, "[A-Z][a-z]{0,8}").prop_map(|(n, owner)| account_created(n, &owner)),
        4 => (1u128..1000, 1i64..1_000).prop_map(|(n, amount)| funds_deposited(n, amount)),
        4 => (1u128..1000, 1i64..1_000).prop_map(|(n, amount)| funds_withdrawn(n, amount)),
    ]
}

fn event_sequence() -> impl Strategy<Value = Vec<AccountEvent>> {
    prop::collection::vec(account_event(), 0..40)
}

/// Fold that stops at the first rejected event, like replay does
fn fold_prefix(events: &[AccountEvent]) -> AccountState {
    let mut state = AccountState::empty();
    for event in events {
        match apply_event(&state, event) {
            Ok(next) => state = next,
            Err(_) => break,
        }
    }
    state
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: the fold is deterministic
    #[test]
    fn prop_fold_is_deterministic(events in event_sequence()) {
        let first = AccountState::from_events(&events);
        let second = AccountState::from_events(&events);

        prop_assert_eq!(first, second, "Same events must produce same result");
    }

    /// Property: a single application is referentially transparent
    #[test]
    fn prop_apply_is_pure(prefix in event_sequence(), event in account_event()) {
        let state = fold_prefix(&prefix);
        let before = state.clone();

        let first = apply_event(&state, &event);
        let second = apply_event(&state, &event);

        prop_assert_eq!(first, second);
        prop_assert_eq!(state, before, "Input state must not change");
    }

    /// Property: every reachable state is well formed
    #[test]
    fn prop_reachable_states_are_well_formed(events in event_sequence()) {
        let mut state = AccountState::empty();
        prop_assert!(state.is_well_formed());

        for event in &events {
            if let Ok(next) = apply_event(&state, event) {
                prop_assert!(next.is_well_formed(), "{:?} is not well formed", next);
                state = next;
            }
        }
    }

    /// Property: rejected events report the index of the first failure
    #[test]
    fn prop_from_events_fails_at_first_rejection(events in event_sequence()) {
        let expected_index = {
            let mut state = AccountState::empty();
            let mut failed = None;
            for (index, event) in events.iter().enumerate() {
                match apply_event(&state, event) {
                    Ok(next) => state = next,
                    Err(_) => {
                        failed = Some(index);
                        break;
                    }
                }
            }
            failed
        };

        match AccountState::from_events(&events) {
            Ok(state) => {
                prop_assert_eq!(expected_index, None);
                prop_assert_eq!(state, fold_prefix(&events));
            }
            Err((index, _)) => prop_assert_eq!(expected_index, Some(index)),
        }
    }

    /// Property: folding in two chunks equals folding at once
    #[test]
    fn prop_fold_is_associative(events in event_sequence(), split in 0usize..40) {
        let valid_len = match AccountState::from_events(&events) {
            Ok(_) => events.len(),
            Err((index, _)) => index,
        };
        let valid = &events[..valid_len];
        let split = split.min(valid.len());

        let all_at_once = AccountState::from_events(valid).unwrap();
        let chunked = valid[split..]
            .iter()
            .try_fold(AccountState::from_events(&valid[..split]).unwrap(), |state, event| {
                apply_event(&state, event)
            })
            .unwrap();

        prop_assert_eq!(all_at_once, chunked);
    }

    /// Property: deposits then equal withdrawals return to zero
    #[test]
    fn prop_deposit_withdraw_inverse(amount in 1i64..1_000_000) {
        let events = vec![
            account_created(1, "Alice"),
            funds_deposited(2, amount),
            funds_withdrawn(3, amount),
        ];

        let state = AccountState::from_events(&events).unwrap();

        prop_assert_eq!(state.balance, 0);
        prop_assert!(state.active);
    }
}
