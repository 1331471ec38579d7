//! In-memory fake providers
//!
//! Implement the domain ports entirely in memory with failure injection, so
//! component tests run without a provider. Backend-assigned fields behave
//! like the real table: inserts get an id, a `pending` status, and a
//! monotonically increasing creation timestamp.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Duration;
use core_kernel::{ClaimId, UserId};
use tokio::sync::mpsc;

use domain_claims::{
    ChangeEvent, ChangeFeedPort, Claim, ClaimError, ClaimInsert, ClaimStatus, ClaimsTablePort,
    DocumentStorePort, FeedSubscription,
};
use domain_session::{AuthError, IdentityPort, Session, SignUpOutcome};

use crate::fixtures::TemporalFixtures;

/// In-memory identity provider
///
/// Seeded accounts sign in with their password; sign-ups default to the
/// verification-pending outcome like a provider with email confirmation on.
pub struct FakeIdentity {
    accounts: Mutex<Vec<FakeAccount>>,
    immediate_sessions: bool,
    fail_sign_out: AtomicBool,
}

struct FakeAccount {
    email: String,
    password: String,
    full_name: String,
}

impl Default for FakeIdentity {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self {
            accounts: Mutex::new(Vec::new()),
            immediate_sessions: false,
            fail_sign_out: AtomicBool::new(false),
        }
    }

    /// Sign-ups return an active session instead of verification-pending
    pub fn with_immediate_sessions(mut self) -> Self {
        self.immediate_sessions = true;
        self
    }

    /// Seeds an account that can sign in
    pub fn with_account(
        self,
        email: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        self.accounts.lock().unwrap().push(FakeAccount {
            email: email.into(),
            password: password.into(),
            full_name: full_name.into(),
        });
        self
    }

    /// Makes the next sign-out fail provider-side
    pub fn fail_next_sign_out(&self) {
        self.fail_sign_out.store(true, Ordering::SeqCst);
    }

    fn session_for(account: &FakeAccount) -> Session {
        Session {
            user_id: UserId::new(),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            access_token: format!("fake-token-{}", account.email),
            expires_at: None,
        }
    }
}

#[async_trait]
impl IdentityPort for FakeIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let accounts = self.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|a| a.email == email && a.password == password)
            .map(Self::session_for)
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::DuplicateEmail);
        }
        let account = FakeAccount {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };
        let outcome = if self.immediate_sessions {
            SignUpOutcome::Active(Self::session_for(&account))
        } else {
            SignUpOutcome::VerificationPending
        };
        accounts.push(account);
        Ok(outcome)
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        if self.fail_sign_out.swap(false, Ordering::SeqCst) {
            Err(AuthError::provider("session revocation failed"))
        } else {
            Ok(())
        }
    }
}

/// In-memory claims table with failure injection
pub struct FakeClaimsTable {
    rows: Mutex<Vec<Claim>>,
    fail_select: AtomicBool,
    fail_insert: AtomicBool,
}

impl Default for FakeClaimsTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeClaimsTable {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_select: AtomicBool::new(false),
            fail_insert: AtomicBool::new(false),
        }
    }

    /// Replaces the stored rows
    pub fn set_rows(&self, rows: Vec<Claim>) {
        *self.rows.lock().unwrap() = rows;
    }

    /// Appends a stored row directly, bypassing insert
    pub fn push_row(&self, claim: Claim) {
        self.rows.lock().unwrap().push(claim);
    }

    /// Returns a snapshot of the stored rows
    pub fn rows(&self) -> Vec<Claim> {
        self.rows.lock().unwrap().clone()
    }

    /// Makes the next select fail
    pub fn fail_next_select(&self) {
        self.fail_select.store(true, Ordering::SeqCst);
    }

    /// Makes the next insert fail
    pub fn fail_next_insert(&self) {
        self.fail_insert.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ClaimsTablePort for FakeClaimsTable {
    async fn select_all(&self) -> Result<Vec<Claim>, ClaimError> {
        if self.fail_select.swap(false, Ordering::SeqCst) {
            return Err(ClaimError::fetch("permission denied for table claims"));
        }
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn insert(&self, row: ClaimInsert) -> Result<Claim, ClaimError> {
        if self.fail_insert.swap(false, Ordering::SeqCst) {
            return Err(ClaimError::insert("row insert rejected"));
        }
        let mut rows = self.rows.lock().unwrap();
        let claim = Claim {
            id: ClaimId::new(),
            patient_name: row.patient_name,
            diagnosis: row.diagnosis,
            treatment: row.treatment,
            cost: row.cost,
            status: ClaimStatus::Pending,
            document_path: row.document_path,
            created_at: TemporalFixtures::base_time() + Duration::seconds(rows.len() as i64),
        };
        rows.push(claim.clone());
        Ok(claim)
    }
}

/// In-memory document store with failure injection
pub struct FakeDocumentStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_upload: AtomicBool,
}

impl Default for FakeDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDocumentStore {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_upload: AtomicBool::new(false),
        }
    }

    /// Makes the next upload fail
    pub fn fail_next_upload(&self) {
        self.fail_upload.store(true, Ordering::SeqCst);
    }

    /// Number of stored objects
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Returns the stored bytes for a path returned by `upload`
    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        let object_name = path.strip_prefix("claim-documents/").unwrap_or(path);
        self.objects.lock().unwrap().get(object_name).cloned()
    }
}

#[async_trait]
impl DocumentStorePort for FakeDocumentStore {
    async fn upload(&self, object_name: &str, bytes: Vec<u8>) -> Result<String, ClaimError> {
        if self.fail_upload.swap(false, Ordering::SeqCst) {
            return Err(ClaimError::upload("storage unavailable"));
        }
        self.objects
            .lock()
            .unwrap()
            .insert(object_name.to_string(), bytes);
        Ok(format!("claim-documents/{object_name}"))
    }
}

/// In-memory change feed driven by the test
///
/// Events pushed through [`FakeChangeFeed::emitter`] are delivered to the
/// single subscription; `was_closed` observes the explicit close.
pub struct FakeChangeFeed {
    sender: Mutex<Option<mpsc::Sender<ChangeEvent>>>,
    receiver: Mutex<Option<mpsc::Receiver<ChangeEvent>>>,
    closed: Arc<AtomicBool>,
}

impl Default for FakeChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeChangeFeed {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel(16);
        Self {
            sender: Mutex::new(Some(sender)),
            receiver: Mutex::new(Some(receiver)),
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sender the test uses to emit change events
    ///
    /// Panics after `end`.
    pub fn emitter(&self) -> mpsc::Sender<ChangeEvent> {
        self.sender
            .lock()
            .unwrap()
            .clone()
            .expect("feed already ended")
    }

    /// Ends the feed; once outstanding emitters drop, the subscription
    /// sees the stream finish
    pub fn end(&self) {
        self.sender.lock().unwrap().take();
    }

    /// True once the subscription was explicitly closed
    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChangeFeedPort for FakeChangeFeed {
    async fn subscribe(&self) -> Result<Box<dyn FeedSubscription>, ClaimError> {
        let receiver = self
            .receiver
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| ClaimError::fetch("feed already subscribed"))?;
        Ok(Box::new(FakeSubscription {
            receiver,
            closed: self.closed.clone(),
            done: false,
        }))
    }
}

struct FakeSubscription {
    receiver: mpsc::Receiver<ChangeEvent>,
    closed: Arc<AtomicBool>,
    done: bool,
}

#[async_trait]
impl FeedSubscription for FakeSubscription {
    async fn next_event(&mut self) -> Option<ChangeEvent> {
        if self.done {
            return None;
        }
        self.receiver.recv().await
    }

    async fn close(&mut self) -> Result<(), ClaimError> {
        self.done = true;
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
