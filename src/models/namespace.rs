//! Principal namespaces and their storage keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Independent credential namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    User,
    Admin,
}

impl Namespace {
    pub const ALL: [Namespace; 2] = [Namespace::User, Namespace::Admin];

    /// Key of the scalar bearer-token entry.
    pub fn token_key(self) -> &'static str {
        match self {
            Namespace::User => "authToken",
            Namespace::Admin => "admin_token",
        }
    }

    /// Key of the composite record entry (token + principal + issuedAt).
    pub fn record_key(self) -> &'static str {
        match self {
            Namespace::User => "userData",
            Namespace::Admin => "admin_user",
        }
    }

    /// Login surface to navigate to when the session is invalidated.
    pub fn login_path(self) -> &'static str {
        match self {
            Namespace::User => "/",
            Namespace::Admin => "/admin",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::User => "user",
            Namespace::Admin => "admin",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
