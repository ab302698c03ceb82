//! Dependency initialization and wiring for the terminal client.

use std::env;
use std::sync::Arc;

use forum_api::{HttpForumClient, TokenStore};
use forum_session::{ForumClient, Session};
use tracing::info;

use crate::errors::AppError;

/// Default backend API base URL.
const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Default path of the persisted session file.
const DEFAULT_SESSION_FILE: &str = ".gurugolpo-session.json";

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured forum client ready to serve the shell.
    pub forum: ForumClient,
}

impl Dependencies {
    /// Initialize all dependencies from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FORUM_API_URL`: backend base URL (default: http://localhost:8080/api)
    /// - `FORUM_SESSION_FILE`: persisted session path (default:
    ///   .gurugolpo-session.json)
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies, with any previously
    ///   persisted session restored
    /// * `Err(AppError)` - If the configuration is invalid or the session
    ///   store is unreadable
    pub fn new() -> Result<Self, AppError> {
        let api_url = env::var("FORUM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let session_file =
            env::var("FORUM_SESSION_FILE").unwrap_or_else(|_| DEFAULT_SESSION_FILE.to_string());

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(AppError::config(format!(
                "FORUM_API_URL must be an http(s) URL, got {:?}",
                api_url
            )));
        }

        info!(
            api_url = %api_url,
            session_file = %session_file,
            "Initializing dependencies"
        );

        let tokens = TokenStore::new();
        let api = Arc::new(HttpForumClient::new(api_url.as_str(), tokens.clone()));
        let session = Session::with_store(tokens, session_file.as_str())?;

        Ok(Self {
            forum: ForumClient::new(api, session),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env_vars() {
        env::remove_var("FORUM_API_URL");
        env::remove_var("FORUM_SESSION_FILE");
    }

    #[test]
    #[serial]
    fn test_defaults_apply_when_env_is_unset() {
        clear_env_vars();
        let tmp = tempfile::tempdir().unwrap();
        env::set_var(
            "FORUM_SESSION_FILE",
            tmp.path().join("session.json").display().to_string(),
        );

        let deps = Dependencies::new().unwrap();
        assert!(!deps.forum.session().is_authenticated());

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_invalid_api_url_is_a_config_error() {
        clear_env_vars();
        env::set_var("FORUM_API_URL", "localhost:8080");

        let result = Dependencies::new();
        assert!(matches!(result, Err(AppError::ConfigError(_))));

        clear_env_vars();
    }
}
