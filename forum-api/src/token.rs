//! Shared bearer-token slot.
//!
//! The session layer writes the token on login/logout and the HTTP client
//! reads it on every request, mirroring how the original client kept the
//! token in one browser-storage location read by a request interceptor.

use std::sync::{Arc, RwLock};

/// A cloneable handle to the current bearer token.
///
/// All clones share the same slot. The HTTP client clears the slot when the
/// backend answers 401, so a stale token is never re-sent.
#[derive(Clone, Debug, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current token, if any.
    pub fn get(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Replace the current token.
    pub fn set(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    /// Drop the current token.
    pub fn clear(&self) {
        *self.token.write().unwrap() = None;
    }

    pub fn is_present(&self) -> bool {
        self.token.read().unwrap().is_some()
    }
}
