//! Session state: who is signed in, and the on-disk store that survives
//! process restarts.
//!
//! The session owns the [`TokenStore`] the HTTP client reads, so setting or
//! clearing the token here immediately affects outgoing requests. Only the
//! token and the cached profile persist to disk; vote directions are
//! client-memory and reset with the process.

use std::fs;
use std::path::PathBuf;

use forum_api::TokenStore;
use forum_shared::types::User;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SessionError;

#[derive(Serialize, Deserialize)]
struct StoredSession {
    token: String,
    #[serde(default)]
    user: Option<User>,
}

/// The authenticated identity, explicit and passed down - no ambient
/// globals.
pub struct Session {
    tokens: TokenStore,
    user: Option<User>,
    store_path: Option<PathBuf>,
}

impl Session {
    /// An in-memory session with no persistence.
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            tokens,
            user: None,
            store_path: None,
        }
    }

    /// A session persisted at `path`. If the file exists, the stored token
    /// and profile are restored; a missing file just means signed out.
    pub fn with_store(tokens: TokenStore, path: impl Into<PathBuf>) -> Result<Self, SessionError> {
        let path = path.into();
        let mut session = Self {
            tokens,
            user: None,
            store_path: Some(path.clone()),
        };

        match fs::read_to_string(&path) {
            Ok(raw) => {
                let stored: StoredSession = serde_json::from_str(&raw)?;
                session.tokens.set(stored.token);
                session.user = stored.user;
                debug!(path = %path.display(), "session restored");
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => return Err(error.into()),
        }
        Ok(session)
    }

    /// Whether a bearer token is available for mutating calls.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.is_present()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Install a fresh token and profile after login.
    ///
    /// Returns `true` when the authenticated identity changed - the signal
    /// for callers to drop per-user client state such as vote directions.
    pub fn establish(&mut self, token: String, user: Option<User>) -> Result<bool, SessionError> {
        let changed = match (&self.user, &user) {
            (Some(previous), Some(next)) => previous.id != next.id,
            _ => true,
        };
        self.tokens.set(token);
        self.user = user;
        self.save()?;
        Ok(changed)
    }

    /// Replace the cached profile, e.g. after a follow-up `/auth/me` fetch.
    pub fn set_user(&mut self, user: Option<User>) -> Result<(), SessionError> {
        self.user = user;
        self.save()
    }

    /// Sign out: drop the token, the profile, and the persisted store.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.tokens.clear();
        self.user = None;
        self.save()
    }

    fn save(&self) -> Result<(), SessionError> {
        let Some(path) = &self.store_path else {
            return Ok(());
        };

        match self.tokens.get() {
            Some(token) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let stored = StoredSession {
                    token,
                    user: self.user.clone(),
                };
                fs::write(path, serde_json::to_string_pretty(&stored)?)?;
            }
            None => match fs::remove_file(path) {
                Ok(()) => {}
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => return Err(error.into()),
            },
        }
        Ok(())
    }
}
