// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Aggregate Root
//!
//! Random intents, including malformed and rule-breaking ones, are run
//! against a fresh aggregate. The log must always fold to the cache.

use cim_account::aggregate::AccountState;
use cim_account::projection::StatementProjection;
use cim_account::AccountAggregate;
use proptest::prelude::*;

use crate::fixtures::new_account;

#[derive(Debug, Clone)]
enum Intent {
    Create(String),
    Deposit(i64),
    Withdraw(i64),
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        1 => "[ A-Za-z]{0,6}".prop_map(Intent::Create),
        4 => (-5i64..500).prop_map(Intent::Deposit),
        4 => (-5i64..500).prop_map(Intent::Withdraw),
    ]
}

fn intents() -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(intent(), 0..40)
}

fn run(account: &AccountAggregate, intent: &Intent) -> bool {
    let result = match intent {
        Intent::Create(owner) => account.create(owner),
        Intent::Deposit(amount) => account.deposit(*amount),
        Intent::Withdraw(amount) => account.withdraw(*amount),
    };
    result.is_ok()
}

fn folded_history(account: &AccountAggregate) -> AccountState {
    let events: Vec<_> = account.history().into_iter().map(|stored| stored.data).collect();
    AccountState::from_events(&events).expect("history recorded by the aggregate must fold")
}

proptest! {
    /// Property: a failed intent changes neither the log nor the state
    #[test]
    fn prop_rejected_intents_are_atomic(intents in intents()) {
        let account = new_account();

        for intent in &intents {
            let version = account.version();
            let state = account.snapshot().unwrap();

            if !run(&account, intent) {
                prop_assert_eq!(account.version(), version);
                prop_assert_eq!(account.snapshot().unwrap(), state);
            } else {
                prop_assert_eq!(account.version(), version + 1);
            }
        }
    }

    /// Property: the cache always equals the fold of the log
    #[test]
    fn prop_cache_equals_fold_of_log(intents in intents()) {
        let account = new_account();

        for intent in &intents {
            run(&account, intent);
            prop_assert_eq!(account.snapshot().unwrap(), folded_history(&account));
        }
    }

    /// Property: replay reproduces the incrementally built state
    #[test]
    fn prop_replay_equals_incremental(intents in intents()) {
        let account = new_account();
        for intent in &intents {
            run(&account, intent);
        }
        let incremental = account.snapshot().unwrap();

        let replayed = account.replay().unwrap();

        prop_assert_eq!(&replayed, &incremental);
        prop_assert_eq!(account.snapshot().unwrap(), incremental);
    }

    /// Property: replaying twice in a row gives the same state
    #[test]
    fn prop_replay_is_idempotent(intents in intents()) {
        let account = new_account();
        for intent in &intents {
            run(&account, intent);
        }

        let first = account.replay().unwrap();
        let second = account.replay().unwrap();

        prop_assert_eq!(first, second);
    }

    /// Property: every observable state is well formed
    #[test]
    fn prop_invariants_preserved(intents in intents()) {
        let account = new_account();

        for intent in &intents {
            run(&account, intent);
            let state = account.snapshot().unwrap();
            prop_assert!(state.is_well_formed(), "{:?} is not well formed", state);
        }
    }

    /// Property: the statement agrees with the aggregate
    #[test]
    fn prop_statement_matches_state(intents in intents()) {
        let account = new_account();
        for intent in &intents {
            run(&account, intent);
        }

        let history = account.history();
        let statement = StatementProjection::from_history(&history).into_statement();
        let state = account.snapshot().unwrap();

        prop_assert_eq!(statement.closing_balance, state.balance);
        prop_assert_eq!(statement.owner, state.owner);
        prop_assert_eq!(statement.lines.len(), history.len());
        prop_assert_eq!(
            statement.total_deposited - statement.total_withdrawn,
            state.balance
        );
    }
}
