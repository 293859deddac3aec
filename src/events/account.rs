// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Domain Events
//!
//! All state changes to an account are represented as immutable events:
//! - Past tense naming (FundsDeposited, not DepositFunds)
//! - Stamped with an injected event id and timestamp
//! - Serializable so audit consumers can export them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Amount;

/// Account Domain Events
///
/// Closed set of facts that can happen to an account. Every consumer
/// matches exhaustively, so a new variant must be handled everywhere
/// before the crate builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    /// Account was opened for an owner
    AccountCreated(AccountCreated),

    /// Money was paid into the account
    FundsDeposited(FundsDeposited),

    /// Money was taken out of the account
    FundsWithdrawn(FundsWithdrawn),
}

/// Identity and time stamp shared by every event
///
/// Built by the aggregate from its injected id generator and clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier
    pub event_id: Uuid,

    /// Account this event belongs to
    pub aggregate_id: Uuid,

    /// When this event occurred
    pub timestamp: DateTime<Utc>,
}

impl EventMetadata {
    pub fn new(event_id: Uuid, aggregate_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_id,
            aggregate_id,
            timestamp,
        }
    }
}

/// Account was opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCreated {
    /// Unique event identifier
    pub event_id: Uuid,

    /// Account aggregate ID
    pub aggregate_id: Uuid,

    /// When this event occurred
    pub timestamp: DateTime<Utc>,

    /// Account holder
    pub owner: String,
}

/// Funds were deposited
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsDeposited {
    pub event_id: Uuid,
    pub aggregate_id: Uuid,
    pub timestamp: DateTime<Utc>,

    /// Amount credited
    pub amount: Amount,
}

/// Funds were withdrawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundsWithdrawn {
    pub event_id: Uuid,
    pub aggregate_id: Uuid,
    pub timestamp: DateTime<Utc>,

    /// Amount debited
    pub amount: Amount,
}

impl AccountEvent {
    /// Build an `AccountCreated` event
    pub fn created(meta: EventMetadata, owner: impl Into<String>) -> Self {
        AccountEvent::AccountCreated(AccountCreated {
            event_id: meta.event_id,
            aggregate_id: meta.aggregate_id,
            timestamp: meta.timestamp,
            owner: owner.into(),
        })
    }

    /// Build a `FundsDeposited` event
    pub fn deposited(meta: EventMetadata, amount: Amount) -> Self {
        AccountEvent::FundsDeposited(FundsDeposited {
            event_id: meta.event_id,
            aggregate_id: meta.aggregate_id,
            timestamp: meta.timestamp,
            amount,
        })
    }

    /// Build a `FundsWithdrawn` event
    pub fn withdrawn(meta: EventMetadata, amount: Amount) -> Self {
        AccountEvent::FundsWithdrawn(FundsWithdrawn {
            event_id: meta.event_id,
            aggregate_id: meta.aggregate_id,
            timestamp: meta.timestamp,
            amount,
        })
    }

    /// Shared identity and time stamp
    pub fn metadata(&self) -> EventMetadata {
        use AccountEvent::*;

        match self {
            AccountCreated(e) => EventMetadata::new(e.event_id, e.aggregate_id, e.timestamp),
            FundsDeposited(e) => EventMetadata::new(e.event_id, e.aggregate_id, e.timestamp),
            FundsWithdrawn(e) => EventMetadata::new(e.event_id, e.aggregate_id, e.timestamp),
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.metadata().event_id
    }

    pub fn aggregate_id(&self) -> Uuid {
        self.metadata().aggregate_id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.metadata().timestamp
    }

    /// Get human-readable event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            AccountEvent::AccountCreated(_) => "AccountCreated",
            AccountEvent::FundsDeposited(_) => "FundsDeposited",
            AccountEvent::FundsWithdrawn(_) => "FundsWithdrawn",
        }
    }
}
