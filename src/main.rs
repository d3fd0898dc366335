// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Microtask-Session diagnostic tool
//!
//! Reports the persisted user and admin sessions and, when given an API
//! path, issues one authorized GET through the shared client.
//!
//! Usage: `microtask-session [api-path]`

use anyhow::Context;
use microtask_session::{
    config::Config,
    store::{CredentialStore, FileStorage},
    time_utils::format_millis_rfc3339,
    ApiClient, Namespace,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(base_url = %config.api_base_url, "Starting session check");

    let storage = FileStorage::open(&config.storage_dir).with_context(|| {
        format!(
            "Failed to open credential storage at {}",
            config.storage_dir.display()
        )
    })?;
    let store = CredentialStore::new(Arc::new(storage));
    let client = ApiClient::new(config.api_base_url.clone(), store);

    for namespace in Namespace::ALL {
        report_session(&client, namespace);
    }

    if let Some(path) = std::env::args().nth(1) {
        match client.get_json::<serde_json::Value>(&path).await {
            Ok(body) => tracing::info!(path = %path, body = %body, "Request succeeded"),
            Err(err) => tracing::warn!(
                path = %path,
                status = ?err.status(),
                error = %err,
                "Request failed"
            ),
        }
    }

    Ok(())
}

/// Log the state of one namespace's session.
fn report_session(client: &ApiClient, namespace: Namespace) {
    let session = client.session();
    let Some(record) = session.store().get_record(namespace) else {
        tracing::info!(namespace = %namespace, "No session");
        return;
    };

    let issued_at = format_millis_rfc3339(record.issued_at);
    match session.remaining(namespace) {
        Some(left) => tracing::info!(
            namespace = %namespace,
            principal = ?record.principal.name,
            issued_at = %issued_at,
            remaining_mins = left.num_minutes(),
            "Active session"
        ),
        None if session.is_expired(namespace) => tracing::info!(
            namespace = %namespace,
            issued_at = %issued_at,
            "Session expired and cleared"
        ),
        None => tracing::info!(namespace = %namespace, "No session"),
    }
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("microtask_session=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
