//! Tests for the session store state machine

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use core_kernel::UserId;
use domain_session::{AuthError, AuthPhase, IdentityPort, Session, SessionStore, SignUpOutcome};

/// Scriptable in-memory identity provider
struct ScriptedIdentity {
    accounts: Mutex<Vec<(String, String, String)>>,
    fail_sign_out: bool,
}

impl ScriptedIdentity {
    fn new() -> Self {
        Self {
            accounts: Mutex::new(vec![(
                "asha@example.com".to_string(),
                "secret".to_string(),
                "Asha Rao".to_string(),
            )]),
            fail_sign_out: false,
        }
    }

    fn with_failing_sign_out() -> Self {
        Self {
            fail_sign_out: true,
            ..Self::new()
        }
    }

    fn session_for(email: &str, full_name: &str) -> Session {
        Session {
            user_id: UserId::new(),
            email: email.to_string(),
            full_name: full_name.to_string(),
            access_token: format!("token-{email}"),
            expires_at: None,
        }
    }
}

#[async_trait]
impl IdentityPort for ScriptedIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let accounts = self.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(e, _, n)| Self::session_for(e, n))
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|(e, _, _)| e == email) {
            return Err(AuthError::DuplicateEmail);
        }
        accounts.push((
            email.to_string(),
            password.to_string(),
            full_name.to_string(),
        ));
        Ok(SignUpOutcome::VerificationPending)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        if self.fail_sign_out {
            Err(AuthError::provider("session revocation failed"))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_sign_in_success_sets_session() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));

    store.sign_in("asha@example.com", "secret").await.unwrap();

    let session = store.session().expect("session should be set");
    assert_eq!(session.email, "asha@example.com");
    assert_eq!(session.full_name, "Asha Rao");
    assert!(store.phase().is_authenticated());
}

#[tokio::test]
async fn test_sign_in_failure_stays_anonymous() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));

    let err = store
        .sign_in("asha@example.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(*store.phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn test_failed_sign_in_preserves_existing_session() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));
    store.sign_in("asha@example.com", "secret").await.unwrap();

    let err = store.sign_in("other@example.com", "nope").await.unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(
        store.session().map(|s| s.email.as_str()),
        Some("asha@example.com")
    );
}

#[tokio::test]
async fn test_sign_up_duplicate_email_leaves_session_unset() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));

    let err = store
        .sign_up("asha@example.com", "pw", "A")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::DuplicateEmail));
    assert!(store.session().is_none());
}

#[tokio::test]
async fn test_sign_up_verification_pending_does_not_authenticate() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));

    let outcome = store
        .sign_up("new@example.com", "pw", "New User")
        .await
        .unwrap();

    assert!(matches!(outcome, SignUpOutcome::VerificationPending));
    assert_eq!(*store.phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn test_sign_out_clears_session() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));
    store.sign_in("asha@example.com", "secret").await.unwrap();

    store.sign_out().await.unwrap();

    assert_eq!(*store.phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn test_sign_out_clears_session_even_when_provider_fails() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::with_failing_sign_out()));
    store.sign_in("asha@example.com", "secret").await.unwrap();

    let err = store.sign_out().await.unwrap_err();

    assert!(matches!(err, AuthError::Provider(_)));
    assert_eq!(*store.phase(), AuthPhase::Anonymous);
}

#[tokio::test]
async fn test_sign_out_when_anonymous_is_a_no_op() {
    let mut store = SessionStore::new(Arc::new(ScriptedIdentity::new()));
    store.sign_out().await.unwrap();
    assert_eq!(*store.phase(), AuthPhase::Anonymous);
}
