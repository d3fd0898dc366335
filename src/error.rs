// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types surfaced to API callers.

use crate::models::Namespace;
use reqwest::StatusCode;

/// How the interceptor chain handled a 401 response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedOutcome {
    /// The request was itself an auth endpoint (bad credentials).
    AuthEndpoint,
    /// A credential was attached; the namespace was cleared and the
    /// caller was sent back to its login surface.
    SessionInvalidated,
    /// No credential was attached; nothing to invalidate.
    Anonymous,
}

/// Client error type returned from every API call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Unauthorized ({namespace}): {path}")]
    Unauthorized {
        namespace: Namespace,
        path: String,
        outcome: UnauthorizedOutcome,
        body: String,
    },

    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid request path: {0}")]
    InvalidPath(String),

    #[error("JSON parse error: {0}")]
    Decode(String),

    #[error("Login response did not include both a token and a principal")]
    IncompleteCredentials,

    #[error("Login succeeded but the {0} session could not be saved")]
    SessionNotPersisted(Namespace),
}

impl ClientError {
    /// True when the error is a 401 from an auth endpoint, i.e. the
    /// credentials typed into a login form were rejected.
    pub fn is_bad_credentials(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized {
                outcome: UnauthorizedOutcome::AuthEndpoint,
                ..
            }
        )
    }

    /// True when the layer already logged the principal out and navigated away.
    pub fn is_session_invalidated(&self) -> bool {
        matches!(
            self,
            ClientError::Unauthorized {
                outcome: UnauthorizedOutcome::SessionInvalidated,
                ..
            }
        )
    }

    /// HTTP status carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Network(err) => err.status(),
            _ => None,
        }
    }
}

/// Result type alias for API calls
pub type Result<T> = std::result::Result<T, ClientError>;
