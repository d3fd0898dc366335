// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forced navigation after a session is invalidated.

use std::sync::Mutex;

/// Receives "go to this login surface" requests from the client.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}

/// Navigator that only logs. Default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, location: &str) {
        tracing::info!(location, "Navigation to login surface requested");
    }
}

/// Navigator that remembers every requested location.
///
/// Lets an embedder poll for a pending redirect instead of reacting inline.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All locations requested so far, oldest first.
    pub fn locations(&self) -> Vec<String> {
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Take the most recent location and forget the history.
    pub fn take_last(&self) -> Option<String> {
        let mut locations = self.locations.lock().unwrap_or_else(|e| e.into_inner());
        let last = locations.pop();
        locations.clear();
        last
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &str) {
        tracing::info!(location, "Navigation to login surface requested");
        self.locations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(location.to_string());
    }
}
