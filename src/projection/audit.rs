// Copyright (c) 2025 - Cowboy AI, Inc.
//! Audit trail written to `tracing`

use tracing::info;

use super::AuditSink;
use crate::event_store::StoredEvent;
use crate::events::AccountEvent;

/// Emits one `info` event per history entry
#[derive(Debug, Clone, Default)]
pub struct TracingAuditSink {
    recorded: usize,
}

impl TracingAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries seen since creation
    pub fn recorded(&self) -> usize {
        self.recorded
    }
}

/// One-line human description of an event
pub fn describe(event: &AccountEvent) -> String {
    match event {
        AccountEvent::AccountCreated(e) => format!("owner={}", e.owner),
        AccountEvent::FundsDeposited(e) => format!("amount=+{}", e.amount),
        AccountEvent::FundsWithdrawn(e) => format!("amount=-{}", e.amount),
    }
}

impl AuditSink for TracingAuditSink {
    fn record(&mut self, event: &StoredEvent<AccountEvent>) {
        self.recorded += 1;
        info!(
            "#{} {} {} at {} ({})",
            event.sequence,
            event.event_type,
            event.data.event_id(),
            event.data.timestamp().to_rfc3339(),
            describe(&event.data)
        );
    }

    fn finish(&mut self) {
        info!("Audit trail complete: {} events", self.recorded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Amount;
    use crate::events::EventMetadata;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_describe_events() {
        let meta = EventMetadata::new(Uuid::from_u128(1), Uuid::from_u128(2), Utc::now());

        assert_eq!(describe(&AccountEvent::created(meta, "Alice")), "owner=Alice");
        assert_eq!(
            describe(&AccountEvent::deposited(meta, Amount::new(5).unwrap())),
            "amount=+5"
        );
        assert_eq!(
            describe(&AccountEvent::withdrawn(meta, Amount::new(3).unwrap())),
            "amount=-3"
        );
    }

    #[test]
    fn test_sink_counts_entries() {
        let meta = EventMetadata::new(Uuid::from_u128(1), Uuid::from_u128(2), Utc::now());
        let mut sink = TracingAuditSink::new();

        sink.record(&StoredEvent::account(1, AccountEvent::created(meta, "Alice")));
        sink.record(&StoredEvent::account(2, AccountEvent::deposited(meta, Amount::new(1).unwrap())));
        sink.finish();

        assert_eq!(sink.recorded(), 2);
    }
}
