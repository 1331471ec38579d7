//! Authentication errors

use thiserror::Error;

/// Errors surfaced by identity operations
///
/// Every variant carries a message fit to show the user directly; the shell
/// converts these into dismissible notifications and never retries.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The email/password pair was rejected by the provider
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An identity already exists for this email
    #[error("An account with this email already exists")]
    DuplicateEmail,

    /// The identity exists but its email has not been verified yet
    #[error("Email not verified yet; check your inbox for the verification link")]
    VerificationPending,

    /// The request was rejected before reaching the provider
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The provider returned an unexpected failure
    #[error("Identity provider error: {0}")]
    Provider(String),
}

impl AuthError {
    pub fn validation(message: impl Into<String>) -> Self {
        AuthError::Validation(message.into())
    }

    pub fn connection(message: impl Into<String>) -> Self {
        AuthError::Connection(message.into())
    }

    pub fn provider(message: impl Into<String>) -> Self {
        AuthError::Provider(message.into())
    }

    /// Returns true if this error indicates a transient failure
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Connection(_))
    }
}
