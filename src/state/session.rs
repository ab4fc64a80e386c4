//! Session-token store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the opaque bearer token for the current browser user. Provided
//! once via context at the app root; the API layer and route guard read
//! it, the auth flows (bootstrap, register, login, logout) write it. No
//! other component reaches into `localStorage` directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use crate::util::storage;

/// `localStorage` key the token persists under across reloads.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Process-wide holder of the session bearer token.
///
/// Cheap to clone: all clones share the same in-memory slot. Writes are
/// mirrored to durable storage so the session survives navigation and
/// reload; `load` re-reads storage at startup.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    token: Arc<Mutex<Option<String>>>,
}

impl SessionStore {
    /// Create a store primed from durable storage, if a token was persisted.
    pub fn load() -> Self {
        Self {
            token: Arc::new(Mutex::new(storage::load_string(SESSION_TOKEN_KEY))),
        }
    }

    /// Current token, or `None` when no session is active. Never fails.
    pub fn get(&self) -> Option<String> {
        self.token.lock().map(|t| t.clone()).unwrap_or(None)
    }

    /// Persist `token` for the rest of the process lifetime and across reloads.
    pub fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
        storage::save_string(SESSION_TOKEN_KEY, token);
    }

    /// Remove the token; subsequent `get` calls return `None`.
    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
        storage::remove(SESSION_TOKEN_KEY);
    }
}
