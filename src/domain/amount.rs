// Copyright (c) 2025 - Cowboy AI, Inc.
//! Amount Value Object with Positivity Invariant

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::UsageError;

/// Strictly positive quantity of money moved by a deposit or withdrawal
///
/// # Examples
///
/// ```rust
/// use cim_account::domain::Amount;
///
/// let amount = Amount::new(500).unwrap();
/// assert_eq!(amount.value(), 500);
///
/// assert!(Amount::new(0).is_err());
/// assert!(Amount::new(-10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Amount(u64);

impl Amount {
    /// Create an amount from caller input
    ///
    /// # Invariants
    /// - Strictly greater than zero
    pub fn new(value: i64) -> Result<Self, UsageError> {
        if value <= 0 {
            return Err(UsageError::NonPositiveAmount(value));
        }
        Ok(Self(value as u64))
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for Amount {
    type Error = UsageError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value == 0 {
            return Err(UsageError::NonPositiveAmount(0));
        }
        Ok(Self(value))
    }
}

impl From<Amount> for u64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
