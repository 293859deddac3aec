// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory event log

use chrono::{DateTime, Utc};

use super::{EventLog, StoredEvent};
use crate::events::AccountEvent;

/// Vector-backed [`EventLog`]
///
/// Sequence numbers are positions in the vector plus one, so entry `n`
/// always lives at index `n - 1`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventLog {
    events: Vec<StoredEvent<AccountEvent>>,
}

impl InMemoryEventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log with room for `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
        }
    }

    /// Build a log from previously recorded events
    ///
    /// No validation happens here. Hand the log to
    /// [`AccountAggregate::from_log`](crate::aggregate::AccountAggregate::from_log)
    /// to check that the history folds.
    pub fn from_events(events: impl IntoIterator<Item = AccountEvent>) -> Self {
        let mut log = Self::new();
        for event in events {
            log.append(event);
        }
        log
    }
}

impl EventLog for InMemoryEventLog {
    fn append(&mut self, event: AccountEvent) -> u64 {
        let sequence = self.events.len() as u64 + 1;
        self.events.push(StoredEvent::account(sequence, event));
        sequence
    }

    fn all(&self) -> Vec<StoredEvent<AccountEvent>> {
        self.events.clone()
    }

    fn version(&self) -> u64 {
        self.events.len() as u64
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn read_from(&self, from_sequence: u64) -> Vec<StoredEvent<AccountEvent>> {
        let start = from_sequence.saturating_sub(1).min(self.events.len() as u64) as usize;
        self.events[start..].to_vec()
    }

    fn read_by_time_range(
        &self,
        from_time: DateTime<Utc>,
        to_time: DateTime<Utc>,
    ) -> Vec<StoredEvent<AccountEvent>> {
        self.events
            .iter()
            .filter(|stored| {
                let timestamp = stored.timestamp();
                timestamp >= from_time && timestamp <= to_time
            })
            .cloned()
            .collect()
    }
}
