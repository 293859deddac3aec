// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-account
//!
//! Deterministic ids, timestamps and aggregates shared by the integration
//! tests. Nothing here reads the wall clock or draws random ids.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use cim_account::capabilities::{FixedClock, SequentialIdGenerator};
use cim_account::domain::Amount;
use cim_account::events::{AccountEvent, EventMetadata};
use cim_account::{AccountAggregate, AccountConfig, AccountState};

pub const AGGREGATE_ID_1: &str = "01934f4a-1000-7000-8000-000000001000";

// Fixed test timestamp (2026-01-19T12:00:00Z)
pub const FIXED_TIMESTAMP: &str = "2026-01-19T12:00:00Z";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn test_config() -> AccountConfig {
    AccountConfig::new(parse_uuid(AGGREGATE_ID_1))
}

/// Never-opened account with sequential ids and a clock ticking one
/// second per event
pub fn new_account() -> AccountAggregate {
    AccountAggregate::new(
        test_config(),
        Arc::new(SequentialIdGenerator::new()),
        Arc::new(FixedClock::stepping(fixed_timestamp(), Duration::seconds(1))),
    )
}

/// Metadata for the n-th hand-built event
pub fn metadata(n: u128) -> EventMetadata {
    EventMetadata::new(
        Uuid::from_u128(n),
        parse_uuid(AGGREGATE_ID_1),
        fixed_timestamp() + Duration::seconds(n as i64),
    )
}

pub fn amount(value: i64) -> Amount {
    Amount::new(value).expect("Invalid amount in test fixture")
}

pub fn account_created(n: u128, owner: &str) -> AccountEvent {
    AccountEvent::created(metadata(n), owner)
}

pub fn funds_deposited(n: u128, value: i64) -> AccountEvent {
    AccountEvent::deposited(metadata(n), amount(value))
}

pub fn funds_withdrawn(n: u128, value: i64) -> AccountEvent {
    AccountEvent::withdrawn(metadata(n), amount(value))
}

pub fn state(owner: &str, balance: u64, active: bool) -> AccountState {
    AccountState {
        owner: owner.to_string(),
        balance,
        active,
    }
}
