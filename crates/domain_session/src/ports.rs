//! Identity provider port
//!
//! The hosted identity provider is consumed through this trait. The Postgres
//! and REST adapters live in `infra_provider`; tests use in-memory fakes.

use async_trait::async_trait;

use crate::error::AuthError;
use crate::session::Session;

/// Outcome of a sign-up call
///
/// Providers that require email verification accept the identity without
/// issuing a session; the caller must sign in after the email is confirmed.
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    /// The identity is active and a session was issued immediately
    Active(Session),
    /// The identity was created but needs email verification first
    VerificationPending,
}

/// Port for the external identity provider
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Exchanges credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Registers a new identity
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError>;

    /// Revokes the session behind the given token
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
