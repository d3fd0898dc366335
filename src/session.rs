// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session policy derived from the credential store.
//!
//! Nothing here caches a "logged in" flag: every answer is recomputed from
//! the store. The one side effect is that [`SessionPolicy::is_expired`]
//! purges the namespace whenever it reports expiry.

use crate::models::{Namespace, Principal};
use crate::store::CredentialStore;
use chrono::Duration;

/// Absolute session lifetime, identical for both namespaces (24 hours).
pub const SESSION_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// How far in the future an `issuedAt` may lie before the record is
/// considered corrupt (tolerates small clock adjustments).
pub const MAX_FUTURE_SKEW_MS: i64 = 5 * 60 * 1000;

/// Age of a record issued at `issued_at`, or `None` if the timestamp cannot
/// be trusted: it overflows the subtraction or lies too far in the future.
fn session_age(now: i64, issued_at: i64) -> Option<i64> {
    let age = now.checked_sub(issued_at)?;
    (age >= -MAX_FUTURE_SKEW_MS).then_some(age)
}

/// `Authorization` header value for one namespace.
///
/// Always present: `"Bearer <token>"` with a credential, `""` without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub authorization: String,
}

impl AuthHeader {
    pub const NAME: &'static str = "Authorization";

    pub fn bearer(token: &str) -> Self {
        Self {
            authorization: format!("Bearer {token}"),
        }
    }

    pub fn empty() -> Self {
        Self {
            authorization: String::new(),
        }
    }

    /// True if the header carries a credential.
    pub fn is_attached(&self) -> bool {
        !self.authorization.is_empty()
    }
}

/// Session checks over a credential store.
#[derive(Clone)]
pub struct SessionPolicy {
    store: CredentialStore,
}

impl SessionPolicy {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Token and principal are both present. Expiry is not considered.
    pub fn is_authenticated(&self, namespace: Namespace) -> bool {
        self.store.get_record(namespace).is_some()
    }

    /// True when there is no record, the record is older than the TTL, or
    /// its `issuedAt` is unusable.
    ///
    /// A `true` answer also clears the namespace.
    pub fn is_expired(&self, namespace: Namespace) -> bool {
        let expired = match self.store.get_record(namespace) {
            None => true,
            Some(record) => {
                match session_age(self.store.clock().now_millis(), record.issued_at) {
                    Some(age) => age > SESSION_TTL_MS,
                    None => {
                        tracing::warn!(
                            namespace = %namespace,
                            issued_at = record.issued_at,
                            "Credential has an unusable issue time; treating as expired"
                        );
                        true
                    }
                }
            }
        };

        if expired {
            self.store.clear(namespace);
        }
        expired
    }

    /// Header to merge into an outgoing request for `namespace`.
    pub fn auth_header_for(&self, namespace: Namespace) -> AuthHeader {
        match self.store.get_token(namespace) {
            Some(token) => AuthHeader::bearer(&token),
            None => AuthHeader::empty(),
        }
    }

    /// Principal of a live (authenticated and unexpired) session.
    pub fn current_principal(&self, namespace: Namespace) -> Option<Principal> {
        if self.is_expired(namespace) {
            return None;
        }
        self.store.get_principal(namespace)
    }

    /// Time left before the session expires, `None` if absent or expired.
    ///
    /// Pure read: unlike `is_expired` it never clears anything.
    pub fn remaining(&self, namespace: Namespace) -> Option<Duration> {
        let record = self.store.get_record(namespace)?;
        let age = session_age(self.store.clock().now_millis(), record.issued_at)?;
        let left = SESSION_TTL_MS.checked_sub(age)?;
        (left >= 0).then(|| Duration::milliseconds(left))
    }
}
