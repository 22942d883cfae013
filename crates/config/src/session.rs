//! Viewer session and login gate.
//!
//! A session is either anonymous (the login prompt is shown) or holds a
//! token. Tokens are resolved with the following fallback chain:
//!
//! 1. `--token` on the command line
//! 2. `GANTT_SESSION_TOKEN` environment variable
//! 3. `session_token` from the config file
//! 4. Anonymous (the viewer asks for a password)
//!
//! Signing in accepts any non-empty password. No credential is checked.

use secrecy::{ExposeSecret, SecretString};

use crate::Config;

/// Environment variable holding a session token.
pub const SESSION_TOKEN_ENV: &str = "GANTT_SESSION_TOKEN";

/// The viewer session.
///
/// The token is kept in a [`SecretString`], so `Debug` output never shows it.
///
/// # Examples
///
/// ```
/// use gantt_config::Session;
///
/// let mut session = Session::anonymous();
/// assert!(!session.is_authenticated());
///
/// assert!(!session.sign_in(""));
/// assert!(session.sign_in("hunter2"));
/// assert!(session.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    token: Option<SecretString>,
}

impl Session {
    /// Creates a session with no token.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates an authenticated session from a token.
    ///
    /// Blank tokens yield an anonymous session.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(SecretString::from(token)),
        }
    }

    /// Returns `true` once a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Signs in with a password, returning whether the session is now
    /// authenticated.
    ///
    /// Any password that is not blank is accepted and becomes the session
    /// token.
    pub fn sign_in(&mut self, password: &str) -> bool {
        if password.trim().is_empty() {
            tracing::debug!("rejected blank password");
            return false;
        }
        self.token = Some(SecretString::from(password.to_string()));
        tracing::info!("signed in");
        true
    }

    /// Exposes the token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }
}

/// Resolves the session from the command line, the environment, and the
/// config file.
///
/// # Examples
///
/// ```no_run
/// use gantt_config::{Config, session::resolve_session};
///
/// let config = Config::default();
/// let session = resolve_session(None, &config);
/// ```
#[must_use]
pub fn resolve_session(cli_token: Option<&str>, config: &Config) -> Session {
    let env_token = std::env::var(SESSION_TOKEN_ENV).ok();
    resolve_from(cli_token, env_token.as_deref(), config.session_token.as_deref())
}

/// Picks the first non-blank token out of the given sources, highest
/// priority first.
#[must_use]
pub fn resolve_from(
    cli_token: Option<&str>,
    env_token: Option<&str>,
    config_token: Option<&str>,
) -> Session {
    let sources = [("cli", cli_token), ("env", env_token), ("config", config_token)];
    sources
        .into_iter()
        .find_map(|(source, token)| {
            token.filter(|t| !t.trim().is_empty()).map(|t| {
                tracing::debug!(source, "session token resolved");
                Session::with_token(t)
            })
        })
        .unwrap_or_default()
}
