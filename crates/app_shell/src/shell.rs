//! The portal shell
//!
//! Single owner of all page state: session store, claims list, modal
//! visibility, form drafts, and notices. Every mutation goes through `&mut
//! self`, so operations are serialized; when a manual refresh and a
//! feed-driven refresh race, whichever resolves last simply overwrites the
//! list.

use tracing::{info, warn};

use domain_claims::{Claim, ClaimRepository};
use domain_session::{SessionStore, SignUpOutcome};

use crate::forms::{ClaimForm, LoginForm, SignupForm};
use crate::notify::Notices;
use crate::view::{feature_cards, ClaimRowView, DashboardView, LandingView, View};

/// Which modal dialog is open, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Signup,
    NewClaim,
}

/// Commands pushed onto the shell from outside the UI loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Re-fetch the claims list; emitted by the change-feed subscriber
    RefreshClaims,
}

/// Application shell state
pub struct Shell {
    sessions: SessionStore,
    repo: ClaimRepository,
    claims: Vec<Claim>,
    notices: Notices,
    modal: Option<Modal>,
    login_form: LoginForm,
    signup_form: SignupForm,
    claim_form: ClaimForm,
    abha_query: String,
    loading: bool,
}

impl Shell {
    pub fn new(sessions: SessionStore, repo: ClaimRepository) -> Self {
        Self {
            sessions,
            repo,
            claims: Vec::new(),
            notices: Notices::new(),
            modal: None,
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            claim_form: ClaimForm::default(),
            abha_query: String::new(),
            loading: false,
        }
    }

    // --- modal management ---

    /// Opens the login modal; ignored while signed in
    pub fn open_login(&mut self) {
        if self.sessions.session().is_none() {
            self.modal = Some(Modal::Login);
        }
    }

    /// Opens the signup modal; ignored while signed in
    pub fn open_signup(&mut self) {
        if self.sessions.session().is_none() {
            self.modal = Some(Modal::Signup);
        }
    }

    /// Opens the new-claim modal; ignored while signed out
    pub fn open_new_claim(&mut self) {
        if self.sessions.session().is_some() {
            self.modal = Some(Modal::NewClaim);
        }
    }

    /// Closes the open modal and discards its draft
    pub fn close_modal(&mut self) {
        match self.modal.take() {
            Some(Modal::Login) => self.login_form.clear(),
            Some(Modal::Signup) => self.signup_form.clear(),
            Some(Modal::NewClaim) => self.claim_form.clear(),
            None => {}
        }
    }

    // --- auth operations ---

    /// Submits the login form
    ///
    /// On success the form is cleared, the modal closes, and the claims list
    /// is fetched. On failure the form keeps its values so the user can
    /// correct and resubmit.
    pub async fn submit_login(&mut self) {
        if let Err(message) = self.login_form.check() {
            self.notices.push_error(message);
            return;
        }

        let email = self.login_form.email.clone();
        let password = self.login_form.password.clone();

        match self.sessions.sign_in(&email, &password).await {
            Ok(()) => {
                self.login_form.clear();
                self.modal = None;
                self.notices.push_success("Logged in successfully!");
                self.refresh_claims().await;
            }
            Err(err) => {
                self.notices.push_error(err.to_string());
            }
        }
    }

    /// Submits the signup form
    ///
    /// A provider that requires email verification returns no session; the
    /// user stays anonymous and is told to check their inbox.
    pub async fn submit_signup(&mut self) {
        if let Err(message) = self.signup_form.check() {
            self.notices.push_error(message);
            return;
        }

        let email = self.signup_form.email.clone();
        let password = self.signup_form.password.clone();
        let full_name = self.signup_form.full_name.clone();

        match self.sessions.sign_up(&email, &password, &full_name).await {
            Ok(SignUpOutcome::Active(_)) => {
                self.signup_form.clear();
                self.modal = None;
                self.notices.push_success("Account created successfully!");
                self.refresh_claims().await;
            }
            Ok(SignUpOutcome::VerificationPending) => {
                self.signup_form.clear();
                self.modal = None;
                self.notices
                    .push_success("Account created! Please check your email to verify.");
            }
            Err(err) => {
                self.notices.push_error(err.to_string());
            }
        }
    }

    /// Signs out and drops all dashboard state
    ///
    /// Local state is cleared even when the provider call fails; the user is
    /// back on the landing page either way.
    pub async fn sign_out(&mut self) {
        let result = self.sessions.sign_out().await;

        self.claims.clear();
        self.claim_form.clear();
        self.abha_query.clear();
        self.loading = false;
        self.modal = None;

        match result {
            Ok(()) => self.notices.push_success("Logged out successfully!"),
            Err(err) => self.notices.push_error(err.to_string()),
        }
    }

    // --- claims operations ---

    /// Re-fetches the claims list
    ///
    /// A fetch failure empties the list rather than leaving stale rows, and
    /// surfaces a notice.
    pub async fn refresh_claims(&mut self) {
        if self.sessions.session().is_none() {
            return;
        }

        self.loading = true;
        match self.repo.list().await {
            Ok(claims) => {
                self.claims = claims;
            }
            Err(err) => {
                warn!(error = %err, "Claims fetch failed");
                self.claims.clear();
                self.notices.push_error("Failed to fetch claims");
            }
        }
        self.loading = false;
    }

    /// Submits the new-claim draft
    ///
    /// Ignored while a fetch is in flight. On success the draft is
    /// discarded, the modal closes, and the list is refreshed; on failure
    /// the draft keeps its values.
    pub async fn submit_claim(&mut self) {
        if self.loading {
            return;
        }

        let (claim, attachment) = match self.claim_form.to_submission() {
            Ok(parts) => parts,
            Err(err) => {
                self.notices.push_error(err.to_string());
                return;
            }
        };

        match self.repo.create(claim, attachment).await {
            Ok(created) => {
                info!(claim_id = %created.id, "Claim submitted");
                self.claim_form.clear();
                self.modal = None;
                self.notices.push_success("Claim submitted successfully!");
                self.refresh_claims().await;
            }
            Err(err) => {
                self.notices.push_error(err.to_string());
            }
        }
    }

    // --- ABHA search ---

    pub fn set_abha_query(&mut self, query: impl Into<String>) {
        self.abha_query = query.into();
    }

    /// Kicks off an ABHA verification for whatever was typed
    ///
    /// The integration is not wired to a registry yet; any input just
    /// acknowledges with an in-progress notice.
    pub fn verify_abha(&mut self) {
        self.notices.push_success("Verification in progress...");
    }

    // --- commands and rendering ---

    /// Applies one externally-pushed command
    pub async fn handle_command(&mut self, command: ShellCommand) {
        match command {
            ShellCommand::RefreshClaims => self.refresh_claims().await,
        }
    }

    /// Renders the current view model
    pub fn view(&self) -> View {
        match self.sessions.session() {
            Some(session) => View::Dashboard(DashboardView {
                welcome_name: session.full_name.clone(),
                abha_query: self.abha_query.clone(),
                loading: self.loading,
                new_claim_open: self.modal == Some(Modal::NewClaim),
                rows: self.claims.iter().map(ClaimRowView::from_claim).collect(),
            }),
            None => View::Landing(LandingView {
                login_open: self.modal == Some(Modal::Login),
                signup_open: self.modal == Some(Modal::Signup),
                features: feature_cards(),
            }),
        }
    }

    // --- accessors ---

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, index: usize) {
        self.notices.dismiss(index);
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn session(&self) -> Option<&domain_session::Session> {
        self.sessions.session()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    pub fn signup_form_mut(&mut self) -> &mut SignupForm {
        &mut self.signup_form
    }

    pub fn claim_form_mut(&mut self) -> &mut ClaimForm {
        &mut self.claim_form
    }
}
