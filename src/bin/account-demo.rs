// Copyright (c) 2025 - Cowboy AI, Inc.
//! Account Demo
//!
//! Opens an account, moves some money, replays the log and prints the
//! audit trail and the JSON statement.
//!
//! Run with: RUST_LOG=debug cargo run --bin account-demo
//!
//! Environment:
//! - `ACCOUNT_ID` - aggregate UUID (default: new v7 id)
//! - `ACCOUNT_LOG_CAPACITY` - events to preallocate (default: 16)
//! - `ACCOUNT_MAX_OWNER_LEN` - owner name limit (default: 256)

use anyhow::{Context, Result};
use cim_account::{
    capabilities::{SystemClock, UuidV7Generator},
    projection::{StatementProjection, TracingAuditSink},
    AccountAggregate, AccountConfig,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Load configuration from environment variables
fn from_env() -> Result<AccountConfig> {
    let mut config = AccountConfig::default();

    if let Ok(id) = std::env::var("ACCOUNT_ID") {
        config.aggregate_id = id.parse().context("ACCOUNT_ID is not a valid UUID")?;
    }

    if let Ok(capacity) = std::env::var("ACCOUNT_LOG_CAPACITY") {
        config = config.with_log_capacity(
            capacity
                .parse()
                .context("ACCOUNT_LOG_CAPACITY is not a number")?,
        );
    }

    if let Ok(max) = std::env::var("ACCOUNT_MAX_OWNER_LEN") {
        config = config.with_max_owner_len(
            max.parse()
                .context("ACCOUNT_MAX_OWNER_LEN is not a number")?,
        );
    }

    Ok(config)
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = from_env()?;
    info!("Configuration loaded:");
    info!("  - Account: {}", config.aggregate_id);
    info!("  - Log capacity: {}", config.log_capacity);
    info!("  - Max owner length: {}", config.max_owner_len);

    let account = AccountAggregate::new(config, Arc::new(UuidV7Generator), Arc::new(SystemClock));

    account.create("Alice").context("Failed to open account")?;
    account.deposit(500).context("Failed to deposit")?;
    account.withdraw(120).context("Failed to withdraw")?;

    if let Err(err) = account.withdraw(1_000) {
        warn!("Overdraft refused as expected: {}", err);
    }

    let incremental = account.snapshot()?;
    let replayed = account.replay().context("Replay failed")?;
    anyhow::ensure!(
        incremental == replayed,
        "Replayed state {:?} differs from cached state {:?}",
        replayed,
        incremental
    );
    info!(
        "State: owner={} balance={} active={}",
        replayed.owner, replayed.balance, replayed.active
    );

    account.audit(&mut TracingAuditSink::new());

    let mut statement = StatementProjection::new();
    account.audit(&mut statement);
    println!(
        "{}",
        serde_json::to_string_pretty(statement.statement()).context("Failed to render statement")?
    );

    Ok(())
}
