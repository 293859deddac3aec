// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account aggregate configuration

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::OwnerName;

/// Account aggregate configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Identity stamped on every event of this account
    pub aggregate_id: Uuid,

    /// Number of events to preallocate in a fresh log
    pub log_capacity: usize,

    /// Maximum owner name length in characters
    pub max_owner_len: usize,
}

impl AccountConfig {
    /// Create a configuration for a known account
    pub fn new(aggregate_id: Uuid) -> Self {
        Self {
            aggregate_id,
            ..Self::default()
        }
    }

    /// Set the initial log capacity
    pub fn with_log_capacity(mut self, log_capacity: usize) -> Self {
        self.log_capacity = log_capacity;
        self
    }

    /// Set the maximum owner name length
    pub fn with_max_owner_len(mut self, max_owner_len: usize) -> Self {
        self.max_owner_len = max_owner_len;
        self
    }
}

impl Default for AccountConfig {
    /// A fresh account with a new v7 identity
    fn default() -> Self {
        Self {
            aggregate_id: Uuid::now_v7(),
            log_capacity: 16,
            max_owner_len: OwnerName::DEFAULT_MAX_LENGTH,
        }
    }
}
