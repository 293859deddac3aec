// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Command Handlers for the Account Aggregate
//!
//! Command handlers are pure functions that:
//! 1. Take current state, a command and the event metadata to stamp
//! 2. Build the prospective event
//! 3. Run it through [`apply_event`] to obtain the next state
//!
//! # Handler Pattern
//!
//! ```text
//! handle_command(&State, Command, EventMetadata) → Result<Decision, InvariantViolation>
//! ```
//!
//! Handlers never touch the log; the aggregate root appends the event
//! only when a handler returns `Ok`.

use super::account::{apply_event, AccountState};
use super::commands::{DepositFunds, OpenAccount, WithdrawFunds};
use crate::domain::InvariantViolation;
use crate::events::{AccountEvent, EventMetadata};

/// Accepted command: the event to record and the state it leads to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub event: AccountEvent,
    pub state: AccountState,
}

/// Run an already-built event through the transition function
pub fn decide(state: &AccountState, event: AccountEvent) -> Result<Decision, InvariantViolation> {
    let next = apply_event(state, &event)?;
    Ok(Decision { event, state: next })
}

/// Handle OpenAccount command
///
/// # Business Rules
/// - Account must not already be active
pub fn handle_open_account(
    state: &AccountState,
    command: OpenAccount,
    meta: EventMetadata,
) -> Result<Decision, InvariantViolation> {
    decide(state, AccountEvent::created(meta, command.owner.into_inner()))
}

/// Handle DepositFunds command
///
/// # Business Rules
/// - Account must be active
/// - Balance must not overflow
pub fn handle_deposit(
    state: &AccountState,
    command: DepositFunds,
    meta: EventMetadata,
) -> Result<Decision, InvariantViolation> {
    decide(state, AccountEvent::deposited(meta, command.amount))
}

/// Handle WithdrawFunds command
///
/// # Business Rules
/// - Account must be active
/// - Amount must not exceed the balance
pub fn handle_withdraw(
    state: &AccountState,
    command: WithdrawFunds,
    meta: EventMetadata,
) -> Result<Decision, InvariantViolation> {
    decide(state, AccountEvent::withdrawn(meta, command.amount))
}
