// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, registration and logout.
//!
//! These are the only calls that create credentials. A response must carry
//! both a token and a principal; anything less stores nothing.

use crate::client::ApiClient;
use crate::error::{ClientError, Result};
use crate::models::{Namespace, Principal};
use serde::{Deserialize, Serialize};

/// Login / verification response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    /// Admin endpoints name this field `admin`.
    #[serde(default, alias = "admin")]
    pub user: Option<Principal>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// New account registration.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Verification<'a> {
    email: &'a str,
    code: &'a str,
}

impl ApiClient {
    /// Log a user in and persist the session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal> {
        let response: LoginResponse = self
            .post_json("auth/login", &Credentials { email, password })
            .await?;
        self.establish(Namespace::User, response)
    }

    /// Start registration. The server answers with a verification step.
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse> {
        self.post_json("auth/register", request).await
    }

    /// Finish registration with the emailed code and persist the session.
    pub async fn verify_registration(&self, email: &str, code: &str) -> Result<Principal> {
        let response: LoginResponse = self
            .post_json("auth/verify-email", &Verification { email, code })
            .await?;
        self.establish(Namespace::User, response)
    }

    /// Log an administrator in and persist the admin session.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<Principal> {
        let response: LoginResponse = self
            .post_json("admin/login", &Credentials { email, password })
            .await?;
        self.establish(Namespace::Admin, response)
    }

    /// Drop the local session for `namespace`.
    pub fn logout(&self, namespace: Namespace) {
        self.store().clear(namespace);
        tracing::info!(namespace = %namespace, "Logged out");
    }

    fn establish(&self, namespace: Namespace, response: LoginResponse) -> Result<Principal> {
        match (response.token, response.user) {
            (Some(token), Some(principal)) if !token.is_empty() => {
                let persisted = self.store().store(namespace, &token, &principal);
                if !persisted && self.store().is_attached() {
                    return Err(ClientError::SessionNotPersisted(namespace));
                }
                tracing::info!(namespace = %namespace, "Session established");
                Ok(principal)
            }
            _ => {
                tracing::warn!(namespace = %namespace, "Login response missing token or principal");
                Err(ClientError::IncompleteCredentials)
            }
        }
    }
}
