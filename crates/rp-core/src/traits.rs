//! # Core Traits (Ports)
//!
//! The auth flow is an external collaborator: the core only consumes the
//! `User` it hands back once the (simulated) authentication completes.

use async_trait::async_trait;
use crate::error::Result;
use crate::models::User;

/// Identity contract. Implementations perform no real credential check;
/// they echo an identity back after whatever delay they simulate.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolves a login or registration attempt to a `User`.
    ///
    /// A blank username is not an error: implementations derive one from
    /// the email local part, the way the sign-in form fills the field.
    async fn authenticate(&self, username: &str, email: &str) -> Result<User>;
}
