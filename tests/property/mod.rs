// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `event_application` - the pure transition function and its fold
//! - `aggregate_operations` - intents run through the aggregate root

mod aggregate_operations;
mod event_application;
