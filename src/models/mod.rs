// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the session layer.

pub mod credential;
pub mod namespace;

pub use credential::{CredentialRecord, Principal, PrincipalId};
pub use namespace::Namespace;
