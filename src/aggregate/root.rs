// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Aggregate Root
//!
//! Binds one [`EventLog`] to a cached [`AccountState`] and is the only
//! sanctioned path for changing either.
//!
//! # Validate-then-append
//!
//! Every intent runs the same protocol under the aggregate's write lock:
//!
//! ```text
//! 1. reject malformed input          (UsageError, nothing built)
//! 2. stamp id + timestamp            (injected IdGenerator / Clock)
//! 3. new = apply_event(cached, e)    (InvariantViolation, nothing stored)
//! 4. log.append(e); cached = new     (both or neither)
//! ```
//!
//! Readers take the read lock and so observe either the state before an
//! operation or the state after it.
//!
//! # Replay
//!
//! [`AccountAggregate::replay`] rebuilds the cache from the empty state by
//! folding the whole log. If history no longer folds, the cache is marked
//! corrupted and every later call reports the same consistency error
//! until a replay succeeds.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::account::{apply_event, AccountState};
use super::commands::{DepositFunds, OpenAccount, WithdrawFunds};
use super::handlers::{handle_deposit, handle_open_account, handle_withdraw, Decision};
use crate::capabilities::{Clock, IdGenerator};
use crate::config::AccountConfig;
use crate::domain::InvariantViolation;
use crate::errors::{AccountError, AccountResult};
use crate::event_store::{EventLog, InMemoryEventLog, StoredEvent};
use crate::events::{AccountEvent, EventMetadata};
use crate::projection::AuditSink;

/// Cached view of the log
#[derive(Debug, Clone, PartialEq, Eq)]
enum CachedState {
    Valid(AccountState),
    Corrupted {
        sequence: u64,
        violation: InvariantViolation,
    },
}

impl CachedState {
    fn current(&self) -> AccountResult<&AccountState> {
        match self {
            CachedState::Valid(state) => Ok(state),
            CachedState::Corrupted {
                sequence,
                violation,
            } => Err(AccountError::Consistency {
                sequence: *sequence,
                violation: violation.clone(),
            }),
        }
    }
}

struct Inner<L> {
    log: L,
    cached: CachedState,
}

/// Event-sourced account
///
/// `AccountAggregate` is `Send + Sync`; share it behind an `Arc` to serve
/// several callers. Different accounts share nothing.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use cim_account::aggregate::{AccountAggregate, AccountState};
/// use cim_account::capabilities::{SystemClock, UuidV7Generator};
/// use cim_account::config::AccountConfig;
///
/// let account = AccountAggregate::new(
///     AccountConfig::default(),
///     Arc::new(UuidV7Generator),
///     Arc::new(SystemClock),
/// );
///
/// account.create("Alice").unwrap();
/// account.deposit(500).unwrap();
/// account.withdraw(120).unwrap();
///
/// assert_eq!(
///     account.snapshot().unwrap(),
///     AccountState { owner: "Alice".into(), balance: 380, active: true }
/// );
/// ```
pub struct AccountAggregate<L: EventLog = InMemoryEventLog> {
    config: AccountConfig,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    inner: RwLock<Inner<L>>,
}

impl AccountAggregate<InMemoryEventLog> {
    /// Create a never-opened account with an empty in-memory log
    pub fn new(config: AccountConfig, ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        let log = InMemoryEventLog::with_capacity(config.log_capacity);
        info!("Created account aggregate {}", config.aggregate_id);

        Self {
            config,
            ids,
            clock,
            inner: RwLock::new(Inner {
                log,
                cached: CachedState::Valid(AccountState::empty()),
            }),
        }
    }
}

impl<L: EventLog> AccountAggregate<L> {
    /// Rebuild an account from previously recorded history
    ///
    /// # Errors
    ///
    /// `Consistency` if the history does not fold under the current rules
    pub fn from_log(
        config: AccountConfig,
        log: L,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> AccountResult<Self> {
        let aggregate = Self::with_log(config, log, ids, clock);
        aggregate.snapshot()?;
        Ok(aggregate)
    }

    /// Rebuild an account from recorded history, keeping it even when the
    /// history does not fold
    ///
    /// A failed fold leaves the aggregate marked corrupted: `snapshot` and
    /// every intent return the consistency error.
    pub fn with_log(
        config: AccountConfig,
        log: L,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let cached = Self::fold_log(&log);
        info!(
            "Rebuilt account aggregate {} from {} events",
            config.aggregate_id,
            log.version()
        );

        Self {
            config,
            ids,
            clock,
            inner: RwLock::new(Inner { log, cached }),
        }
    }

    /// Open the account for `owner`
    ///
    /// # Errors
    ///
    /// - `Usage` if the owner name is empty or too long
    /// - `Invariant(AlreadyActive)` if the account is already open
    pub fn create(&self, owner: &str) -> AccountResult<StoredEvent<AccountEvent>> {
        let command = OpenAccount::new(owner, self.config.max_owner_len)?;
        self.execute("create", |state, meta| {
            handle_open_account(state, command, meta)
        })
    }

    /// Pay `amount` into the account
    ///
    /// # Errors
    ///
    /// - `Usage` if `amount <= 0`
    /// - `Invariant(InactiveAccount)` if the account is not open
    /// - `Invariant(BalanceOverflow)` if the balance would overflow
    pub fn deposit(&self, amount: i64) -> AccountResult<StoredEvent<AccountEvent>> {
        let command = DepositFunds::new(amount)?;
        self.execute("deposit", |state, meta| handle_deposit(state, command, meta))
    }

    /// Take `amount` out of the account
    ///
    /// # Errors
    ///
    /// - `Usage` if `amount <= 0`
    /// - `Invariant(InactiveAccount)` if the account is not open
    /// - `Invariant(InsufficientFunds)` if `amount` exceeds the balance
    pub fn withdraw(&self, amount: i64) -> AccountResult<StoredEvent<AccountEvent>> {
        let command = WithdrawFunds::new(amount)?;
        self.execute("withdraw", |state, meta| handle_withdraw(state, command, meta))
    }

    /// Discard the cache and rebuild it from the whole log
    ///
    /// Idempotent: two calls with no append in between yield the same state.
    ///
    /// # Errors
    ///
    /// `Consistency` naming the first event that no longer applies. The
    /// cache stays marked corrupted afterwards.
    pub fn replay(&self) -> AccountResult<AccountState> {
        let mut inner = self.inner.write();
        let cached = Self::fold_log(&inner.log);
        inner.cached = cached;

        let state = inner.cached.current()?.clone();
        debug!(
            "Replayed {} events for account {}",
            inner.log.version(),
            self.config.aggregate_id
        );
        Ok(state)
    }

    /// Current cached state, without recomputation
    ///
    /// # Errors
    ///
    /// `Consistency` while the cache is marked corrupted
    pub fn snapshot(&self) -> AccountResult<AccountState> {
        self.inner.read().cached.current().cloned()
    }

    /// Whole event stream in append order, as an independent copy
    pub fn history(&self) -> Vec<StoredEvent<AccountEvent>> {
        self.inner.read().log.all()
    }

    /// Highest sequence number in the log
    pub fn version(&self) -> u64 {
        self.inner.read().log.version()
    }

    pub fn aggregate_id(&self) -> Uuid {
        self.config.aggregate_id
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// Feed the current history to an audit consumer
    ///
    /// The history is copied under the read lock; the sink runs after the
    /// lock is released and cannot stall writers.
    pub fn audit(&self, sink: &mut dyn AuditSink) {
        let history = self.history();
        for stored in &history {
            sink.record(stored);
        }
        sink.finish();
    }

    fn execute<F>(&self, intent: &str, handler: F) -> AccountResult<StoredEvent<AccountEvent>>
    where
        F: FnOnce(&AccountState, EventMetadata) -> Result<Decision, InvariantViolation>,
    {
        let mut inner = self.inner.write();
        let state = inner.cached.current()?;

        let meta = EventMetadata::new(
            self.ids.next_id(),
            self.config.aggregate_id,
            self.clock.now(),
        );

        let Decision { event, state } = handler(state, meta).map_err(|violation| {
            warn!(
                "Rejected {} on account {}: {}",
                intent, self.config.aggregate_id, violation
            );
            violation
        })?;

        let sequence = inner.log.append(event.clone());
        inner.cached = CachedState::Valid(state);

        debug!(
            "Committed {} #{} on account {}",
            event.event_type(),
            sequence,
            self.config.aggregate_id
        );
        Ok(StoredEvent::account(sequence, event))
    }

    fn fold_log(log: &L) -> CachedState {
        let mut state = AccountState::empty();

        for stored in log.all() {
            match apply_event(&state, &stored.data) {
                Ok(next) => state = next,
                Err(violation) => {
                    error!(
                        "Event {} ({}) at sequence {} no longer applies: {}",
                        stored.data.event_id(),
                        stored.event_type,
                        stored.sequence,
                        violation
                    );
                    return CachedState::Corrupted {
                        sequence: stored.sequence,
                        violation,
                    };
                }
            }
        }

        CachedState::Valid(state)
    }
}

impl<L: EventLog> fmt::Debug for AccountAggregate<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("AccountAggregate")
            .field("aggregate_id", &self.config.aggregate_id)
            .field("version", &inner.log.version())
            .field("cached", &inner.cached)
            .finish()
    }
}
