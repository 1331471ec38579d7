//! Session aggregate

use chrono::{DateTime, Utc};
use core_kernel::UserId;
use serde::{Deserialize, Serialize};

/// An authenticated identity returned by the provider
///
/// The access token is opaque to this crate; the provider adapter may decode
/// it to populate `expires_at`, but nothing here inspects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Provider-assigned user identifier
    pub user_id: UserId,
    /// Email address the identity was registered with
    pub email: String,
    /// Display name from the identity's profile metadata
    pub full_name: String,
    /// Opaque provider session token
    pub access_token: String,
    /// Token expiry, when the provider exposes it
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Returns true if the session's token has expired
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

/// Authentication lifecycle phase
///
/// `Anonymous -> Authenticating -> Authenticated`, with `Authenticated ->
/// Anonymous` on sign-out. A failed authentication returns to `Anonymous`
/// with the error surfaced to the caller, never silently retried.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    /// No identity; the landing view renders
    Anonymous,
    /// A sign-in or sign-up call is in flight
    Authenticating,
    /// An identity is active; the dashboard renders
    Authenticated(Session),
}

impl AuthPhase {
    /// Returns the active session, if any
    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthPhase::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Returns true if an identity is active
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated(_))
    }
}
