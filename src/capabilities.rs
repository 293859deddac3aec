// Copyright (c) 2025 - Cowboy AI, Inc.
//! Injected capabilities: identifier generation and time
//!
//! The aggregate never calls `Uuid::now_v7()` or `Utc::now()` itself.
//! Both are passed in at construction so tests can substitute fixed
//! values and get byte-for-byte reproducible event streams.

use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of event identifiers
///
/// Values must be unique across all events created for the lifetime of
/// the process.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Source of event timestamps
///
/// Only used to stamp events, never for branching.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Time-ordered UUID v7 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl IdGenerator for UuidV7Generator {
    fn next_id(&self) -> Uuid {
        Uuid::now_v7()
    }
}

/// Deterministic identifiers `base + 1`, `base + 2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    base: u128,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from an arbitrary base so that several generators
    /// in one test do not collide
    pub fn starting_at(base: u128) -> Self {
        Self {
            base,
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(self.base.wrapping_add(n as u128))
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, optionally advancing by `step` on
/// every reading
#[derive(Debug)]
pub struct FixedClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicU64,
}

impl FixedClock {
    /// Always returns `at`
    pub fn new(at: DateTime<Utc>) -> Self {
        Self::stepping(at, Duration::zero())
    }

    /// Returns `start`, `start + step`, `start + 2 * step`, ...
    pub fn stepping(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            start,
            step,
            ticks: AtomicU64::new(0),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.start + self.step * (tick as i32)
    }
}
