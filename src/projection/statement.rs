// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account statement read model
//!
//! A bank-statement style view of the history: one line per event with
//! the running balance, plus totals. The projection trusts the log and
//! does not re-check invariants; arithmetic saturates instead of failing
//! so that even a corrupted history can be inspected.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{fold_projection, AuditSink};
use crate::event_store::StoredEvent;
use crate::events::AccountEvent;

/// One entry of the statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub sequence: u64,
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    pub credit: Option<u64>,
    pub debit: Option<u64>,
    /// Balance after this entry
    pub balance: u64,
}

/// Statement read model
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountStatement {
    pub aggregate_id: Option<Uuid>,
    pub owner: String,
    pub lines: Vec<StatementLine>,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub closing_balance: u64,
}

impl AccountStatement {
    /// Sequence of the last line, 0 when empty
    pub fn last_sequence(&self) -> u64 {
        self.lines.last().map(|line| line.sequence).unwrap_or(0)
    }
}

/// Pure statement projection: `(Statement, Entry) → Statement`
///
/// Entries at or below the last projected sequence are ignored, which
/// makes re-delivery harmless.
pub fn project_statement(
    mut statement: AccountStatement,
    stored: &StoredEvent<AccountEvent>,
) -> AccountStatement {
    if stored.sequence <= statement.last_sequence() {
        return statement;
    }

    let event = &stored.data;
    let (description, credit, debit) = match event {
        AccountEvent::AccountCreated(e) => {
            statement.owner = e.owner.clone();
            (format!("Account opened for {}", e.owner), None, None)
        }
        AccountEvent::FundsDeposited(e) => {
            let amount = e.amount.value();
            statement.total_deposited = statement.total_deposited.saturating_add(amount);
            statement.closing_balance = statement.closing_balance.saturating_add(amount);
            ("Deposit".to_string(), Some(amount), None)
        }
        AccountEvent::FundsWithdrawn(e) => {
            let amount = e.amount.value();
            statement.total_withdrawn = statement.total_withdrawn.saturating_add(amount);
            statement.closing_balance = statement.closing_balance.saturating_sub(amount);
            ("Withdrawal".to_string(), None, Some(amount))
        }
    };

    statement.aggregate_id.get_or_insert(event.aggregate_id());
    statement.lines.push(StatementLine {
        sequence: stored.sequence,
        event_id: event.event_id(),
        timestamp: event.timestamp(),
        description,
        credit,
        debit,
        balance: statement.closing_balance,
    });
    statement
}

/// [`AuditSink`] that builds an [`AccountStatement`]
#[derive(Debug, Clone, Default)]
pub struct StatementProjection {
    statement: AccountStatement,
}

impl StatementProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project a whole history in one go
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a StoredEvent<AccountEvent>>) -> Self {
        Self {
            statement: fold_projection(project_statement, AccountStatement::default(), history),
        }
    }

    pub fn statement(&self) -> &AccountStatement {
        &self.statement
    }

    pub fn into_statement(self) -> AccountStatement {
        self.statement
    }
}

impl AuditSink for StatementProjection {
    fn record(&mut self, event: &StoredEvent<AccountEvent>) {
        let statement = std::mem::take(&mut self.statement);
        self.statement = project_statement(statement, event);
    }
}
