// Copyright (c) 2025 - Cowboy AI, Inc.
//! Commands for the Account Aggregate
//!
//! Commands express caller intent. Their constructors reject malformed
//! input as [`UsageError`] so that no event is ever built from it.
//!
//! Commands differ from Events:
//! - Commands express intent (what should happen)
//! - Events express facts (what did happen)
//! - Commands can be rejected by business rules
//!
//! Identity and time are not part of a command; the aggregate stamps them
//! from its injected capabilities.

use crate::domain::{Amount, OwnerName};
use crate::errors::UsageError;

/// Command to open the account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenAccount {
    /// Account holder
    pub owner: OwnerName,
}

impl OpenAccount {
    pub fn new(owner: impl AsRef<str>, max_owner_len: usize) -> Result<Self, UsageError> {
        Ok(Self {
            owner: OwnerName::new(owner, max_owner_len)?,
        })
    }
}

/// Command to pay money in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositFunds {
    pub amount: Amount,
}

impl DepositFunds {
    pub fn new(amount: i64) -> Result<Self, UsageError> {
        Ok(Self {
            amount: Amount::new(amount)?,
        })
    }
}

/// Command to take money out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawFunds {
    pub amount: Amount,
}

impl WithdrawFunds {
    pub fn new(amount: i64) -> Result<Self, UsageError> {
        Ok(Self {
            amount: Amount::new(amount)?,
        })
    }
}
