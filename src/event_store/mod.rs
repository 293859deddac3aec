// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Log Abstraction
//!
//! This module defines the append-only log an account aggregate folds its
//! state from, and the in-memory implementation used by the aggregate.
//!
//! # Architecture
//!
//! ```text
//! Intent → Aggregate → Event → EventLog
//!                                 ↓
//!                          replay / audit
//! ```
//!
//! # Event Log Requirements
//!
//! 1. **Append-Only**: Events are never updated or deleted
//! 2. **Ordered**: Reads return events in append order
//! 3. **Unvalidated**: The log stores whatever it is given; validation is
//!    the transition function's job and happens before `append`
//! 4. **Snapshot Reads**: Returned events are copies, so callers cannot
//!    reach the log's internal storage
//!
//! # Example
//!
//! ```rust
//! use cim_account::event_store::{EventLog, InMemoryEventLog};
//! use cim_account::events::{AccountEvent, EventMetadata};
//! use chrono::Utc;
//! use uuid::Uuid;
//!
//! let mut log = InMemoryEventLog::new();
//! let meta = EventMetadata::new(Uuid::now_v7(), Uuid::now_v7(), Utc::now());
//!
//! let sequence = log.append(AccountEvent::created(meta, "Alice"));
//! assert_eq!(sequence, 1);
//! assert_eq!(log.all().len(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::AccountEvent;

pub mod memory;

pub use memory::InMemoryEventLog;

/// Stored event envelope
///
/// Wraps a domain event with its position in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredEvent<E> {
    /// Sequence number within the stream, starting at 1
    pub sequence: u64,

    /// Event type name
    pub event_type: String,

    /// The actual domain event data
    pub data: E,
}

impl<E> StoredEvent<E> {
    /// Create a new stored event envelope
    pub fn new(sequence: u64, event_type: impl Into<String>, data: E) -> Self {
        Self {
            sequence,
            event_type: event_type.into(),
            data,
        }
    }
}

impl StoredEvent<AccountEvent> {
    /// Wrap an account event at the given position
    pub fn account(sequence: u64, event: AccountEvent) -> Self {
        Self::new(sequence, event.event_type(), event)
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.data.timestamp()
    }
}

/// Append-only, ordered storage for one aggregate's events
///
/// Implementations are owned exclusively by one aggregate, which
/// serializes every call; the trait therefore takes `&mut self` for
/// `append` and needs no interior locking.
///
/// A persistence-backed log would implement this trait; `append` is
/// infallible here because the in-memory log cannot fail.
pub trait EventLog: Send + Sync {
    /// Add an event at the end of the stream
    ///
    /// # Returns
    ///
    /// The sequence number assigned to the event
    fn append(&mut self, event: AccountEvent) -> u64;

    /// Read the whole stream in append order
    ///
    /// The returned vector is an independent copy.
    fn all(&self) -> Vec<StoredEvent<AccountEvent>>;

    /// Highest sequence number, or 0 when the stream is empty
    fn version(&self) -> u64;

    /// Number of events in the stream
    fn len(&self) -> usize {
        self.version() as usize
    }

    fn is_empty(&self) -> bool {
        self.version() == 0
    }

    /// Read events starting at a sequence number (inclusive)
    fn read_from(&self, from_sequence: u64) -> Vec<StoredEvent<AccountEvent>> {
        self.all()
            .into_iter()
            .filter(|stored| stored.sequence >= from_sequence)
            .collect()
    }

    /// Read events whose timestamp falls within `[from_time, to_time]`
    fn read_by_time_range(
        &self,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> Vec<StoredEvent<AccountEvent>> {
        self.all()
            .into_iter()
            .filter(|stored| {
                let timestamp = stored.timestamp();
                timestamp >= from_time && timestamp <= to_time
            })
            .collect()
    }
}
