// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Account Invariants
//!
//! Business rules checked by the transition function before an event is
//! folded into state. All functions are pure and deterministic.
//!
//! # Invariant Categories
//!
//! 1. **Lifecycle Invariants**: an account is opened exactly once
//! 2. **Activity Invariants**: money moves only on an active account
//! 3. **Balance Invariants**: the balance never drops below zero and
//!    never wraps on overflow

use serde::{Deserialize, Serialize};

use super::Amount;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), InvariantViolation>;

/// Domain rule breach detected while applying an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantViolation {
    /// Account was already opened
    #[error("Account is already active")]
    AlreadyActive,

    /// Account has not been opened yet
    #[error("Account is not active")]
    InactiveAccount,

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: u64, available: u64 },

    /// Deposit would push the balance past the representable range
    #[error("Deposit of {amount} would overflow balance {balance}")]
    BalanceOverflow { balance: u64, amount: u64 },
}

impl InvariantViolation {
    /// Stable name of the violated rule
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyActive => "AlreadyActive",
            Self::InactiveAccount => "InactiveAccount",
            Self::InsufficientFunds { .. } => "InsufficientFunds",
            Self::BalanceOverflow { .. } => "BalanceOverflow",
        }
    }
}

/// Validate an account can be opened
///
/// # Rules
/// - Account must not be active
pub fn validate_can_open(active: bool) -> ValidationResult {
    if active {
        return Err(InvariantViolation::AlreadyActive);
    }
    Ok(())
}

/// Validate funds can move on the account
///
/// # Rules
/// - Account must be active
pub fn validate_active(active: bool) -> ValidationResult {
    if !active {
        return Err(InvariantViolation::InactiveAccount);
    }
    Ok(())
}

/// Compute the balance after a deposit
///
/// # Rules
/// - Addition must not overflow
pub fn credit(balance: u64, amount: Amount) -> Result<u64, InvariantViolation> {
    balance
        .checked_add(amount.value())
        .ok_or(InvariantViolation::BalanceOverflow {
            balance,
            amount: amount.value(),
        })
}

/// Compute the balance after a withdrawal
///
/// # Rules
/// - Amount must not exceed the balance
/// - Withdrawing the entire balance is allowed
pub fn debit(balance: u64, amount: Amount) -> Result<u64, InvariantViolation> {
    if amount.value() > balance {
        return Err(InvariantViolation::InsufficientFunds {
            requested: amount.value(),
            available: balance,
        });
    }
    Ok(balance - amount.value())
}

/// Check the structural invariants of a materialized account
///
/// An inactive account must be indistinguishable from the empty state.
pub fn is_well_formed(owner: &str, balance: u64, active: bool) -> bool {
    active || (balance == 0 && owner.is_empty())
}
