//! # Session Module
//!
//! Holds the bearer credential for the current operator session. The session
//! is set at login, cleared at logout, and passed explicitly into every store
//! call, so nothing in the domain layer reads ambient global state and store
//! implementations stay testable without a real login flow.

use thiserror::Error;

/// Raised when a store call is attempted without an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no active session; log in first")]
pub struct NotLoggedIn;

/// Operator session context. Cheap to clone, safe to pass by reference into
/// every remote call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-loaded with a token, used when probing a candidate
    /// credential before committing to it.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Store the verified credential for subsequent calls.
    pub fn login(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
        log::info!("session opened");
    }

    /// Drop the credential. Every later store call fails until the next login.
    pub fn logout(&mut self) {
        self.token = None;
        log::info!("session closed");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The credential to attach as `Authorization: Bearer <token>`.
    pub fn bearer(&self) -> Result<&str, NotLoggedIn> {
        self.token.as_deref().ok_or(NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_fails_before_login() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), Err(NotLoggedIn));
    }

    #[test]
    fn bearer_yields_token_after_login() {
        let mut session = Session::new();
        session.login("secret-admin-token");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer(), Ok("secret-admin-token"));
    }

    #[test]
    fn logout_clears_the_credential() {
        let mut session = Session::with_token("secret");
        session.logout();
        assert_eq!(session.bearer(), Err(NotLoggedIn));
    }
}
