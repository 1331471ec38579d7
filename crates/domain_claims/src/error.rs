//! Claim errors
//!
//! Mirrors the points where a user-initiated claims action can fail: reading
//! the list, uploading a document, inserting the row, or local validation.
//! None of these are fatal; the shell converts them to notifications.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClaimError {
    /// Reading the claims collection failed
    #[error("Failed to fetch claims: {0}")]
    Fetch(String),

    /// Uploading the supporting document failed; the insert never ran
    #[error("Failed to upload document: {0}")]
    Upload(String),

    /// Inserting the claim row failed
    #[error("Failed to submit claim: {0}")]
    Insert(String),

    /// The payload failed client-side validation
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClaimError {
    pub fn fetch(message: impl Into<String>) -> Self {
        ClaimError::Fetch(message.into())
    }

    pub fn upload(message: impl Into<String>) -> Self {
        ClaimError::Upload(message.into())
    }

    pub fn insert(message: impl Into<String>) -> Self {
        ClaimError::Insert(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }
}
