// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event-Sourced Account Aggregate
//!
//! This module provides the functional aggregate pattern for event sourcing:
//! - Transition function is pure: (State, Event) → Result<State, Violation>
//! - State reconstruction via event folding: [Event] → State
//! - The aggregate root serializes callers and keeps log and cache in step
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Intent → Command → Handler → Event → EventLog
//!   ↓         ↓         ↓        ↓
//! Input   Usage check Invariants Facts
//! ```
//!
//! # Fold Pattern
//!
//! State is reconstructed by folding events:
//!
//! ```rust,ignore
//! let state = events.iter().try_fold(AccountState::empty(), |state, event| {
//!     apply_event(&state, event)
//! })?;
//! ```
//!
//! # Design Principles
//!
//! ## 1. Command-Event Separation
//! - Commands express intent and reject malformed input
//! - Events express facts and are only recorded once they apply
//!
//! ## 2. Pure Event Application
//! - `apply_event(&State, &Event) → Result<State, InvariantViolation>`
//! - Exhaustive over the closed event set
//! - Deterministic reconstruction from events
//!
//! ## 3. Time and Identity as Parameters
//! - Never call `Utc::now()` or `Uuid::now_v7()` in domain logic
//! - The root stamps events from injected capabilities

pub mod account;
pub mod commands;
pub mod handlers;
pub mod root;

pub use account::{apply_event, AccountState};
pub use commands::{DepositFunds, OpenAccount, WithdrawFunds};
pub use handlers::{decide, handle_deposit, handle_open_account, handle_withdraw, Decision};
pub use root::AccountAggregate;
