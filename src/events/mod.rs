// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Domain Events
//!
//! This module defines all domain events for the account aggregate.
//! Events are immutable facts representing state changes that have occurred.
//!
//! # Event Sourcing Principles
//!
//! 1. **Events are immutable**: Once created, events never change
//! 2. **Events are past tense**: Named for what happened (Deposited, not Deposit)
//! 3. **Events carry identity and time**: event_id and timestamp are injected
//! 4. **Events are facts**: Validation happens before an event reaches the log
//!
//! # Event Flow
//!
//! ```text
//! Intent → Aggregate → Event → EventLog → Audit
//!  (what to do)  (validate)  (what happened)  (append)  (report)
//! ```

pub mod account;

// Re-export commonly used types
pub use account::{AccountCreated, AccountEvent, EventMetadata, FundsDeposited, FundsWithdrawn};
