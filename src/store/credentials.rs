// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-namespace credential records on top of a storage backend.
//!
//! Two entries are written per namespace: the raw bearer token under the
//! namespace's token key, and the composite record (token, principal,
//! issuedAt) as JSON under its record key. All reads go through the
//! composite record, so token and principal cannot drift apart.
//!
//! Storage failures never reach callers as errors: a failed or corrupt read
//! is an absent credential, and a failed write clears the namespace.

use super::backend::{StorageBackend, StorageError};
use super::memory::MemoryStorage;
use crate::models::{CredentialRecord, Namespace, Principal};
use crate::time_utils::{Clock, SystemClock};
use dashmap::DashMap;
use std::sync::{Arc, Mutex};

/// Shared per-namespace write locks.
type WriteLocks = Arc<DashMap<Namespace, Arc<Mutex<()>>>>;

/// Credential store shared by the session policy and the HTTP client.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Option<Arc<dyn StorageBackend>>,
    clock: Arc<dyn Clock>,
    /// Shared across clones so every handle serializes on the same locks.
    write_locks: WriteLocks,
}

impl CredentialStore {
    /// Create a store over the given backend using the system clock.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    pub fn with_clock(backend: Arc<dyn StorageBackend>, clock: Arc<dyn Clock>) -> Self {
        Self {
            backend: Some(backend),
            clock,
            write_locks: Arc::new(DashMap::new()),
        }
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store with no backend at all.
    ///
    /// Writes are silently dropped and every read is absent.
    pub fn detached() -> Self {
        Self {
            backend: None,
            clock: Arc::new(SystemClock),
            write_locks: Arc::new(DashMap::new()),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Persist a fresh credential for `namespace`, replacing any prior one.
    ///
    /// Returns `true` once both entries are written. If either write fails
    /// the namespace is cleared, so a failed login never leaves the previous
    /// credential in place. With no backend this is a silent no-op that
    /// returns `false`.
    pub fn store(&self, namespace: Namespace, token: &str, principal: &Principal) -> bool {
        let Some(backend) = &self.backend else {
            tracing::debug!(namespace = %namespace, "No storage backend; credential not persisted");
            return false;
        };

        let record = CredentialRecord {
            token: token.to_string(),
            principal: principal.clone(),
            issued_at: self.clock.now_millis(),
        };

        let lock = self.lock_for(namespace);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());

        match write_entries(backend.as_ref(), namespace, &record) {
            Ok(()) => {
                tracing::debug!(namespace = %namespace, issued_at = record.issued_at, "Credential stored");
                true
            }
            Err(e) => {
                tracing::warn!(namespace = %namespace, error = %e, "Failed to persist credential; clearing namespace");
                self.remove_entries(backend.as_ref(), namespace);
                false
            }
        }
    }

    /// Read the complete record for `namespace`, if any.
    pub fn get_record(&self, namespace: Namespace) -> Option<CredentialRecord> {
        let backend = self.backend.as_ref()?;

        let raw = match backend.get_item(namespace.record_key()) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(namespace = %namespace, error = %e, "Failed to read credential record");
                return None;
            }
        };

        match serde_json::from_str::<CredentialRecord>(&raw) {
            Ok(record) if record.is_complete() => Some(record),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(namespace = %namespace, error = %e, "Ignoring corrupt credential record");
                None
            }
        }
    }

    pub fn get_token(&self, namespace: Namespace) -> Option<String> {
        self.get_record(namespace).map(|r| r.token)
    }

    pub fn get_principal(&self, namespace: Namespace) -> Option<Principal> {
        self.get_record(namespace).map(|r| r.principal)
    }

    /// Remove both entries for `namespace`. Clearing an empty namespace is a no-op.
    pub fn clear(&self, namespace: Namespace) {
        let Some(backend) = &self.backend else {
            return;
        };

        let lock = self.lock_for(namespace);
        let _guard = lock.lock().unwrap_or_else(|e| e.into_inner());
        self.remove_entries(backend.as_ref(), namespace);
    }

    /// Per-namespace mutex serializing writers, so the two entries of a
    /// namespace always come from the same `store` call.
    fn lock_for(&self, namespace: Namespace) -> Arc<Mutex<()>> {
        self.write_locks
            .entry(namespace)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn remove_entries(&self, backend: &dyn StorageBackend, namespace: Namespace) {
        for key in [namespace.token_key(), namespace.record_key()] {
            if let Err(e) = backend.remove_item(key) {
                tracing::warn!(namespace = %namespace, key, error = %e, "Failed to remove credential entry");
            }
        }
    }
}

fn write_entries(
    backend: &dyn StorageBackend,
    namespace: Namespace,
    record: &CredentialRecord,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(record)?;
    backend.set_item(namespace.record_key(), &json)?;
    backend.set_item(namespace.token_key(), &record.token)
}
