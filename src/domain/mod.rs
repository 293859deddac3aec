// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Domain Models
//!
//! Value objects with validation invariants and the pure business rules
//! enforced when events are folded into account state.
//!
//! # Value Objects with Invariants
//!
//! - [`Amount`] - strictly positive quantity of money
//! - [`OwnerName`] - non-empty, length-bounded account holder name
//!
//! # Business Rules
//!
//! - [`invariants`] - lifecycle and balance rules, reported as
//!   [`InvariantViolation`]

pub mod amount;
pub mod invariants;
pub mod owner;

// Re-export value objects
pub use amount::Amount;
pub use invariants::{InvariantViolation, ValidationResult};
pub use owner::OwnerName;
