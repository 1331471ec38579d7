//! Provider infrastructure errors

use thiserror::Error;

use domain_claims::ClaimError;
use domain_session::AuthError;

/// Errors raised by the provider adapters before mapping into domain errors
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Connecting to the provider failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// An HTTP call failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider returned a body this client cannot interpret
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<sqlx::Error> for ProviderError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                ProviderError::ConnectionFailed(err.to_string())
            }
            other => ProviderError::QueryFailed(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ProviderError::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            ProviderError::UnexpectedResponse(err.to_string())
        } else {
            ProviderError::RequestFailed(err.to_string())
        }
    }
}

impl ProviderError {
    /// Maps into the claims fetch error
    pub fn into_fetch(self) -> ClaimError {
        ClaimError::fetch(self.to_string())
    }

    /// Maps into the claims upload error
    pub fn into_upload(self) -> ClaimError {
        ClaimError::upload(self.to_string())
    }

    /// Maps into the claims insert error
    pub fn into_insert(self) -> ClaimError {
        ClaimError::insert(self.to_string())
    }

    /// Maps into the auth error taxonomy
    pub fn into_auth(self) -> AuthError {
        match self {
            ProviderError::ConnectionFailed(msg) => AuthError::connection(msg),
            other => AuthError::provider(other.to_string()),
        }
    }
}
