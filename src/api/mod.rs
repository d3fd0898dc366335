// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Thin API call wrappers over [`ApiClient`](crate::client::ApiClient).

pub mod auth;

pub use auth::{LoginResponse, MessageResponse, RegisterRequest};
