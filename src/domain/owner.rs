// Copyright (c) 2025 - Cowboy AI, Inc.
//! Owner Name Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::UsageError;

/// Name of the account holder
///
/// Surrounding whitespace is stripped. The empty string is reserved for
/// the never-opened account, so it is rejected here.
///
/// # Examples
///
/// ```rust
/// use cim_account::domain::OwnerName;
///
/// let owner = OwnerName::new("  Alice ", 64).unwrap();
/// assert_eq!(owner.as_str(), "Alice");
///
/// assert!(OwnerName::new("   ", 64).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerName(String);

impl OwnerName {
    /// Default maximum length in characters
    pub const DEFAULT_MAX_LENGTH: usize = 256;

    /// Create an owner name with validation
    ///
    /// # Invariants
    /// - Non-empty after trimming
    /// - At most `max_len` characters
    pub fn new(name: impl AsRef<str>, max_len: usize) -> Result<Self, UsageError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(UsageError::EmptyOwner);
        }

        let len = name.chars().count();
        if len > max_len {
            return Err(UsageError::OwnerTooLong { len, max: max_len });
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OwnerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
