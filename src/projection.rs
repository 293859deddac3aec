// Copyright (c) 2025 - Cowboy AI, Inc.

//! Audit Consumers - Read Side of the Account
//!
//! The aggregate exposes its history; everything that formats, prints or
//! summarizes that history lives here, outside the core.
//!
//! # Architecture
//!
//! ```text
//! AccountAggregate::audit ──> AuditSink::record (one call per entry)
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!         TracingAuditSink                   StatementProjection
//!         (log lines)                        (AccountStatement read model)
//! ```
//!
//! # Projection Properties
//!
//! - **Event order**: entries are applied in sequence order
//! - **Idempotency**: an entry already seen (by sequence) is skipped
//! - **Purity**: the statement fold is a plain function of its inputs, so
//!   replaying the history always yields the same statement
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cim_account::aggregate::AccountAggregate;
//! use cim_account::capabilities::{SystemClock, UuidV7Generator};
//! use cim_account::config::AccountConfig;
//! use cim_account::projection::StatementProjection;
//!
//! let account = AccountAggregate::new(
//!     AccountConfig::default(),
//!     Arc::new(UuidV7Generator),
//!     Arc::new(SystemClock),
//! );
//! account.create("Alice").unwrap();
//! account.deposit(40).unwrap();
//!
//! let mut projection = StatementProjection::new();
//! account.audit(&mut projection);
//!
//! assert_eq!(projection.statement().closing_balance, 40);
//! ```

pub mod audit;
pub mod statement;

pub use audit::TracingAuditSink;
pub use statement::{project_statement, AccountStatement, StatementLine, StatementProjection};

use crate::event_store::StoredEvent;
use crate::events::AccountEvent;

/// Consumer of an account's ordered history
///
/// Sinks run outside the aggregate's lock and see copies of the events;
/// nothing a sink does can reach the log.
pub trait AuditSink {
    /// Receive the next entry, in sequence order
    fn record(&mut self, event: &StoredEvent<AccountEvent>);

    /// Called once after the last entry of an audit pass
    fn finish(&mut self) {}
}

/// Fold a sequence of events through a pure projection
///
/// # Example
///
/// ```rust
/// use cim_account::projection::fold_projection;
///
/// let total = fold_projection(|sum: u64, n: u64| sum + n, 0, vec![1, 2, 3]);
/// assert_eq!(total, 6);
/// ```
pub fn fold_projection<S, E, F>(projection: F, initial_state: S, events: impl IntoIterator<Item = E>) -> S
where
    F: Fn(S, E) -> S,
{
    events.into_iter().fold(initial_state, projection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        seen: Vec<u64>,
        finished: bool,
    }

    impl AuditSink for CountingSink {
        fn record(&mut self, event: &StoredEvent<AccountEvent>) {
            self.seen.push(event.sequence);
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn test_fold_projection_empty_is_identity() {
        let result = fold_projection(|s: i32, e: i32| s + e, 7, Vec::new());
        assert_eq!(result, 7);
    }

    #[test]
    fn test_fold_projection_preserves_order() {
        let result = fold_projection(
            |mut s: Vec<char>, e: char| {
                s.push(e);
                s
            },
            Vec::new(),
            "abc".chars(),
        );
        assert_eq!(result, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_default_finish_is_noop() {
        struct Quiet;
        impl AuditSink for Quiet {
            fn record(&mut self, _event: &StoredEvent<AccountEvent>) {}
        }

        Quiet.finish();

        let mut sink = CountingSink::default();
        sink.finish();
        assert!(sink.finished);
        assert!(sink.seen.is_empty());
    }
}
