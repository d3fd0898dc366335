// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credential persistence.
//!
//! A [`StorageBackend`] is a plain string key/value store with the same
//! contract as browser storage. [`CredentialStore`] layers the per-namespace
//! credential records on top of it.

pub mod backend;
pub mod credentials;
pub mod file;
pub mod memory;

pub use backend::{StorageBackend, StorageError};
pub use credentials::CredentialStore;
pub use file::FileStorage;
pub use memory::MemoryStorage;
