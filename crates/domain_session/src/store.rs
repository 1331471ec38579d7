//! Session store
//!
//! Tracks the current authenticated identity and drives the
//! `Anonymous -> Authenticating -> Authenticated` state machine. The store is
//! an explicitly-scoped context object handed to the shell, not a global.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::AuthError;
use crate::ports::{IdentityPort, SignUpOutcome};
use crate::session::{AuthPhase, Session};

/// Holds the current session and exposes auth operations
pub struct SessionStore {
    provider: Arc<dyn IdentityPort>,
    phase: AuthPhase,
}

impl SessionStore {
    /// Creates a store in the `Anonymous` phase
    pub fn new(provider: Arc<dyn IdentityPort>) -> Self {
        Self {
            provider,
            phase: AuthPhase::Anonymous,
        }
    }

    /// Returns the current auth phase
    pub fn phase(&self) -> &AuthPhase {
        &self.phase
    }

    /// Returns the active session, if any
    pub fn session(&self) -> Option<&Session> {
        self.phase.session()
    }

    /// Signs in with email and password
    ///
    /// On failure the previous phase is restored and the error is returned;
    /// an already-active session is never clobbered by a failed attempt.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let previous = std::mem::replace(&mut self.phase, AuthPhase::Authenticating);

        match self.provider.sign_in(email, password).await {
            Ok(session) => {
                info!(email = %session.email, "Signed in");
                self.phase = AuthPhase::Authenticated(session);
                Ok(())
            }
            Err(err) => {
                self.phase = previous;
                Err(err)
            }
        }
    }

    /// Registers a new identity
    ///
    /// Returns the provider's outcome; if the provider issued a session
    /// immediately it becomes the active one, otherwise the phase is left
    /// untouched until the email is verified and the user signs in.
    pub async fn sign_up(
        &mut self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        let outcome = self.provider.sign_up(email, password, full_name).await?;

        if let SignUpOutcome::Active(session) = &outcome {
            info!(email = %session.email, "Signed up with immediate session");
            self.phase = AuthPhase::Authenticated(session.clone());
        }

        Ok(outcome)
    }

    /// Signs out the active session
    ///
    /// The session is cleared optimistically before the provider call so the
    /// UI can never get stuck signed-in; a provider-side failure is still
    /// reported after the fact.
    pub async fn sign_out(&mut self) -> Result<(), AuthError> {
        let previous = std::mem::replace(&mut self.phase, AuthPhase::Anonymous);

        let Some(session) = previous.session() else {
            return Ok(());
        };

        if let Err(err) = self.provider.sign_out(&session.access_token).await {
            warn!(error = %err, "Provider sign-out failed; local session already cleared");
            return Err(err);
        }

        info!("Signed out");
        Ok(())
    }
}
