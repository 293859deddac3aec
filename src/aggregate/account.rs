// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Account State
//!
//! Implements the event-sourcing fold with pure functions:
//! - Immutable state
//! - Pure, fallible event application
//! - No side effects, no mutations
//!
//! # Architecture
//!
//! ```text
//! (State, Event) → apply_event() → Result<State, InvariantViolation>
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::invariants::{self, InvariantViolation};
use crate::events::AccountEvent;

/// Immutable account state
///
/// Materialized view over an event stream. Each transition produces a
/// new value, so a snapshot handed out earlier never changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountState {
    /// Account holder, empty until the account is opened
    pub owner: String,

    /// Current balance
    pub balance: u64,

    /// Whether the account has been opened
    pub active: bool,
}

impl AccountState {
    /// The never-opened account: `{owner: "", balance: 0, active: false}`
    ///
    /// Used as initial state for event folding.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reconstruct state from an event stream
    ///
    /// ```text
    /// State = fold(Events, empty(), apply_event)
    /// ```
    ///
    /// On failure returns the index of the first event that did not apply.
    pub fn from_events<'a, I>(events: I) -> Result<Self, (usize, InvariantViolation)>
    where
        I: IntoIterator<Item = &'a AccountEvent>,
    {
        events
            .into_iter()
            .enumerate()
            .try_fold(Self::empty(), |state, (index, event)| {
                apply_event(&state, event).map_err(|violation| (index, violation))
            })
    }

    /// Check the structural invariants hold for this value
    pub fn is_well_formed(&self) -> bool {
        invariants::is_well_formed(&self.owner, self.balance, self.active)
    }
}

/// Apply event to state (pure function)
///
/// # Invariants
/// - Function is pure (no side effects)
/// - Same event + same state = same result
/// - Fails, leaving `state` untouched, when the event breaks a domain rule
pub fn apply_event(
    state: &AccountState,
    event: &AccountEvent,
) -> Result<AccountState, InvariantViolation> {
    use AccountEvent::*;

    match event {
        AccountCreated(e) => {
            invariants::validate_can_open(state.active)?;
            Ok(AccountState {
                owner: e.owner.clone(),
                balance: 0,
                active: true,
            })
        }

        FundsDeposited(e) => {
            invariants::validate_active(state.active)?;
            Ok(AccountState {
                balance: invariants::credit(state.balance, e.amount)?,
                ..state.clone()
            })
        }

        FundsWithdrawn(e) => {
            invariants::validate_active(state.active)?;
            Ok(AccountState {
                balance: invariants::debit(state.balance, e.amount)?,
                ..state.clone()
            })
        }
    }
}
