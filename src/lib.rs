// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-sourced account aggregate for the Composable Information Machine
//!
//! Account state is never stored directly. It is derived by folding an
//! ordered, immutable log of domain events through a pure transition
//! function, and an aggregate root keeps the cached state and the log in
//! step under one lock.
//!
//! # Modules
//!
//! - [`events`] - the closed set of account events
//! - [`aggregate`] - transition function, commands, handlers, aggregate root
//! - [`event_store`] - append-only event log
//! - [`domain`] - value objects and invariants
//! - [`capabilities`] - injected id generator and clock
//! - [`projection`] - audit sinks and the statement read model
//! - [`config`] - aggregate configuration
//! - [`errors`] - error taxonomy

pub mod aggregate;
pub mod capabilities;
pub mod config;
pub mod domain;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod projection;

// Re-export commonly used types
pub use aggregate::{AccountAggregate, AccountState};
pub use capabilities::{Clock, IdGenerator};
pub use config::AccountConfig;
pub use errors::{AccountError, AccountResult, UsageError};
pub use events::AccountEvent;
pub use projection::AuditSink;
