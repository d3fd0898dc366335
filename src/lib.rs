// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Microtask-Session: session and request authorization for the
//! micro-earnings platform client.
//!
//! This crate persists user and admin credentials, derives session state
//! from them, and routes every API call through one client that attaches
//! the right bearer token and logs the principal out when the server
//! rejects it.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod time_utils;

pub use client::ApiClient;
pub use error::{ClientError, UnauthorizedOutcome};
pub use models::{CredentialRecord, Namespace, Principal};
pub use session::{AuthHeader, SessionPolicy, SESSION_TTL_MS};
pub use store::CredentialStore;
