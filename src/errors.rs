// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for account aggregate operations

use thiserror::Error;

use crate::domain::InvariantViolation;

/// Errors raised at the aggregate boundary before any event is constructed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(i64),

    /// Owner name was empty or only whitespace
    #[error("Owner name is empty")]
    EmptyOwner,

    /// Owner name exceeded the configured maximum length
    #[error("Owner name is {len} characters, maximum is {max}")]
    OwnerTooLong { len: usize, max: usize },
}

/// Errors that can occur in account operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// The event would break a domain invariant; nothing was recorded
    #[error("Invariant violation: {0}")]
    Invariant(#[from] InvariantViolation),

    /// The request was malformed; no event was constructed
    #[error("Usage error: {0}")]
    Usage(#[from] UsageError),

    /// Stored history no longer folds under the current transition function
    #[error("Consistency error at sequence {sequence}: {violation}")]
    Consistency {
        /// Sequence number of the first event that failed to apply
        sequence: u64,
        /// Why that event was rejected
        violation: InvariantViolation,
    },
}

impl AccountError {
    /// Whether the caller may retry with different parameters.
    ///
    /// Consistency errors are fatal for the aggregate instance.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AccountError::Consistency { .. })
    }

    /// The invariant behind this error, if there is one
    pub fn violation(&self) -> Option<&InvariantViolation> {
        match self {
            AccountError::Invariant(violation) => Some(violation),
            AccountError::Consistency { violation, .. } => Some(violation),
            AccountError::Usage(_) => None,
        }
    }
}

/// Result type for account operations
pub type AccountResult<T> = Result<T, AccountError>;
