//! # rp-auth-simple
//!
//! Simulated implementation of `AuthProvider`, plus the session holder.
//! No credentials are ever checked: the sign-in form's pair is echoed back
//! after a fixed delay, long enough for the login screen to show its
//! spinner. The delay is the only asynchronous element in the whole
//! system; it produces no intermediate state and cannot be cancelled.

use async_trait::async_trait;
use rp_core::error::{AppError, Result};
use rp_core::models::User;
use rp_core::traits::AuthProvider;
use std::time::Duration;

/// Echoes an identity back after `delay`. One second by default, enough
/// to make the spinner visible.
pub struct SimpleAuthProvider {
    delay: Duration,
}

impl SimpleAuthProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimpleAuthProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl AuthProvider for SimpleAuthProvider {
    /// Resolves the form input to a `User` after the simulated delay.
    ///
    /// A blank username falls back to the email local part; a blank email
    /// is rejected because nothing could be derived from it.
    async fn authenticate(&self, username: &str, email: &str) -> Result<User> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::ValidationError(
                "email must not be empty".into(),
            ));
        }

        let username = match username.trim() {
            "" => email.split('@').next().unwrap_or_default(),
            provided => provided,
        };
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "could not derive a username from the email".into(),
            ));
        }

        tokio::time::sleep(self.delay).await;
        tracing::info!(username, "login completed");
        Ok(User {
            username: username.to_string(),
            email: email.to_string(),
        })
    }
}

/// Holds the current identity between login and logout. Every create and
/// comment is attributed to this user.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
