//! Shell integration tests
//!
//! Drive the shell end to end against the in-memory fakes: auth flows,
//! claim submission, list refresh, and view rendering.

use std::sync::Arc;

use rust_decimal_macros::dec;

use app_shell::{Modal, Shell, ShellCommand, View};
use domain_claims::{ClaimRepository, ClaimStatus};
use domain_session::SessionStore;
use test_utils::{FakeClaimsTable, FakeDocumentStore, FakeIdentity, TestClaimBuilder};

struct Harness {
    shell: Shell,
    table: Arc<FakeClaimsTable>,
    store: Arc<FakeDocumentStore>,
}

fn harness(identity: FakeIdentity) -> Harness {
    let table = Arc::new(FakeClaimsTable::new());
    let store = Arc::new(FakeDocumentStore::new());
    let sessions = SessionStore::new(Arc::new(identity));
    let repo = ClaimRepository::new(table.clone(), store.clone());
    Harness {
        shell: Shell::new(sessions, repo),
        table,
        store,
    }
}

fn seeded_identity() -> FakeIdentity {
    FakeIdentity::new().with_account("asha@example.com", "secret", "Asha Rao")
}

async fn signed_in_harness() -> Harness {
    let mut h = harness(seeded_identity());
    h.shell.open_login();
    let form = h.shell.login_form_mut();
    form.email = "asha@example.com".to_string();
    form.password = "secret".to_string();
    h.shell.submit_login().await;
    assert!(h.shell.session().is_some());
    h
}

fn fill_claim_form(shell: &mut Shell) {
    let form = shell.claim_form_mut();
    form.patient_name = "Ravi Kumar".to_string();
    form.diagnosis = "Appendicitis".to_string();
    form.treatment = "Appendectomy".to_string();
    form.cost = "42000".to_string();
}

#[tokio::test]
async fn test_landing_view_before_login() {
    let h = harness(seeded_identity());
    let View::Landing(landing) = h.shell.view() else {
        panic!("expected landing view");
    };
    assert!(!landing.login_open);
    assert_eq!(landing.features.len(), 6);
}

#[tokio::test]
async fn test_login_success_renders_dashboard_with_formatted_rows() {
    let mut h = harness(seeded_identity());
    h.table.push_row(
        TestClaimBuilder::new()
            .with_cost(dec!(5000))
            .with_status(ClaimStatus::Pending)
            .build(),
    );

    h.shell.open_login();
    let form = h.shell.login_form_mut();
    form.email = "asha@example.com".to_string();
    form.password = "secret".to_string();
    h.shell.submit_login().await;

    let View::Dashboard(dashboard) = h.shell.view() else {
        panic!("expected dashboard view");
    };
    assert_eq!(dashboard.welcome_name, "Asha Rao");
    assert_eq!(dashboard.rows.len(), 1);
    assert_eq!(dashboard.rows[0].cost, "₹5,000");
    assert_eq!(dashboard.rows[0].status, "Pending");
    assert_eq!(dashboard.rows[0].submitted_on, "01/01/2025");

    let latest = h.shell.notices().latest().unwrap();
    assert_eq!(latest.message, "Logged in successfully!");
}

#[tokio::test]
async fn test_login_failure_keeps_form_and_modal() {
    let mut h = harness(seeded_identity());
    h.shell.open_login();
    let form = h.shell.login_form_mut();
    form.email = "asha@example.com".to_string();
    form.password = "wrong".to_string();
    h.shell.submit_login().await;

    assert!(h.shell.session().is_none());
    assert_eq!(h.shell.modal(), Some(Modal::Login));
    assert_eq!(h.shell.login_form_mut().email, "asha@example.com");
    assert!(matches!(h.shell.view(), View::Landing(_)));
}

#[tokio::test]
async fn test_login_rejects_invalid_email_client_side() {
    let mut h = harness(seeded_identity());
    h.shell.open_login();
    let form = h.shell.login_form_mut();
    form.email = "not-an-email".to_string();
    form.password = "secret".to_string();
    h.shell.submit_login().await;

    assert!(h.shell.session().is_none());
    assert_eq!(h.shell.notices().items().len(), 1);
}

#[tokio::test]
async fn test_signup_verification_pending_stays_anonymous() {
    let mut h = harness(FakeIdentity::new());
    h.shell.open_signup();
    let form = h.shell.signup_form_mut();
    form.full_name = "Ravi Kumar".to_string();
    form.email = "ravi@example.com".to_string();
    form.password = "secret".to_string();
    h.shell.submit_signup().await;

    assert!(h.shell.session().is_none());
    assert_eq!(h.shell.modal(), None);
    let latest = h.shell.notices().latest().unwrap();
    assert!(latest.message.contains("check your email"));
}

#[tokio::test]
async fn test_signup_immediate_session_lands_on_dashboard() {
    let mut h = harness(FakeIdentity::new().with_immediate_sessions());
    h.shell.open_signup();
    let form = h.shell.signup_form_mut();
    form.full_name = "Ravi Kumar".to_string();
    form.email = "ravi@example.com".to_string();
    form.password = "secret".to_string();
    h.shell.submit_signup().await;

    assert!(h.shell.session().is_some());
    assert!(matches!(h.shell.view(), View::Dashboard(_)));
}

#[tokio::test]
async fn test_duplicate_signup_keeps_form_values() {
    let mut h = harness(seeded_identity());
    h.shell.open_signup();
    let form = h.shell.signup_form_mut();
    form.full_name = "Asha Rao".to_string();
    form.email = "asha@example.com".to_string();
    form.password = "secret".to_string();
    h.shell.submit_signup().await;

    assert!(h.shell.session().is_none());
    assert_eq!(h.shell.modal(), Some(Modal::Signup));
    assert_eq!(h.shell.signup_form_mut().email, "asha@example.com");
    assert_eq!(
        h.shell.notices().latest().unwrap().message,
        "An account with this email already exists"
    );
}

#[tokio::test]
async fn test_sign_out_returns_to_landing_without_stale_rows() {
    let mut h = signed_in_harness().await;
    h.table.push_row(TestClaimBuilder::new().build());
    h.shell.refresh_claims().await;
    assert!(!h.shell.claims().is_empty());

    h.shell.sign_out().await;

    assert!(h.shell.session().is_none());
    assert!(h.shell.claims().is_empty());
    let View::Landing(landing) = h.shell.view() else {
        panic!("expected landing view after sign-out");
    };
    assert!(!landing.login_open);
    assert_eq!(
        h.shell.notices().latest().unwrap().message,
        "Logged out successfully!"
    );
}

#[tokio::test]
async fn test_fetch_failure_empties_list_and_notifies() {
    let mut h = signed_in_harness().await;
    h.table.push_row(TestClaimBuilder::new().build());
    h.shell.refresh_claims().await;
    assert_eq!(h.shell.claims().len(), 1);

    h.table.fail_next_select();
    h.shell.refresh_claims().await;

    assert!(h.shell.claims().is_empty());
    assert_eq!(
        h.shell.notices().latest().unwrap().message,
        "Failed to fetch claims"
    );
}

#[tokio::test]
async fn test_submit_claim_success_clears_form_and_refreshes() {
    let mut h = signed_in_harness().await;
    h.shell.open_new_claim();
    fill_claim_form(&mut h.shell);
    h.shell.submit_claim().await;

    assert_eq!(h.shell.modal(), None);
    assert_eq!(h.shell.claim_form_mut().patient_name, "");
    assert_eq!(h.shell.claims().len(), 1);
    assert_eq!(h.shell.claims()[0].patient_name, "Ravi Kumar");
    assert_eq!(
        h.shell.notices().latest().unwrap().message,
        "Claim submitted successfully!"
    );
}

#[tokio::test]
async fn test_submit_claim_with_document_uploads_it() {
    let mut h = signed_in_harness().await;
    h.shell.open_new_claim();
    fill_claim_form(&mut h.shell);
    h.shell.claim_form_mut().document = Some(app_shell::SelectedDocument {
        file_name: "scan.pdf".to_string(),
        bytes: vec![0x25, 0x50, 0x44, 0x46],
    });
    h.shell.submit_claim().await;

    assert_eq!(h.store.object_count(), 1);
    let path = h.shell.claims()[0].document_path.clone().unwrap();
    assert!(path.ends_with(".pdf"));
    assert_eq!(h.store.contents(&path), Some(vec![0x25, 0x50, 0x44, 0x46]));
}

#[tokio::test]
async fn test_submit_claim_validation_error_keeps_draft() {
    let mut h = signed_in_harness().await;
    h.shell.open_new_claim();
    fill_claim_form(&mut h.shell);
    h.shell.claim_form_mut().cost = "lots".to_string();
    h.shell.submit_claim().await;

    assert_eq!(h.shell.modal(), Some(Modal::NewClaim));
    assert_eq!(h.shell.claim_form_mut().patient_name, "Ravi Kumar");
    assert!(h.shell.claims().is_empty());
}

#[tokio::test]
async fn test_cancel_new_claim_discards_draft() {
    let mut h = signed_in_harness().await;
    h.shell.open_new_claim();
    fill_claim_form(&mut h.shell);
    h.shell.close_modal();

    assert_eq!(h.shell.modal(), None);
    assert_eq!(h.shell.claim_form_mut().patient_name, "");
}

#[tokio::test]
async fn test_modal_guards_follow_auth_state() {
    let mut h = harness(seeded_identity());
    h.shell.open_new_claim();
    assert_eq!(h.shell.modal(), None);

    let mut h = signed_in_harness().await;
    h.shell.open_login();
    assert_eq!(h.shell.modal(), None);
    h.shell.open_new_claim();
    assert_eq!(h.shell.modal(), Some(Modal::NewClaim));
}

#[tokio::test]
async fn test_refresh_command_last_resolved_wins() {
    let mut h = signed_in_harness().await;
    h.table.push_row(TestClaimBuilder::new().with_patient_name("First").build());
    h.shell.refresh_claims().await;
    assert_eq!(h.shell.claims()[0].patient_name, "First");

    h.table.set_rows(vec![TestClaimBuilder::new()
        .with_patient_name("Second")
        .build()]);
    h.shell.handle_command(ShellCommand::RefreshClaims).await;

    assert_eq!(h.shell.claims().len(), 1);
    assert_eq!(h.shell.claims()[0].patient_name, "Second");
}

#[tokio::test]
async fn test_refreshed_list_is_most_recent_first() {
    let mut h = signed_in_harness().await;
    h.table.push_row(
        TestClaimBuilder::new()
            .with_patient_name("Older")
            .created_seconds_after_base(0)
            .build(),
    );
    h.table.push_row(
        TestClaimBuilder::new()
            .with_patient_name("Newer")
            .created_seconds_after_base(60)
            .build(),
    );

    h.shell.refresh_claims().await;

    assert_eq!(h.shell.claims()[0].patient_name, "Newer");
    assert_eq!(h.shell.claims()[1].patient_name, "Older");
}

#[tokio::test]
async fn test_verify_abha_acknowledges() {
    let mut h = signed_in_harness().await;
    h.shell.set_abha_query("12-3456-7890-1234");
    h.shell.verify_abha();

    let View::Dashboard(dashboard) = h.shell.view() else {
        panic!("expected dashboard view");
    };
    assert_eq!(dashboard.abha_query, "12-3456-7890-1234");
    assert_eq!(
        h.shell.notices().latest().unwrap().message,
        "Verification in progress..."
    );
}

#[tokio::test]
async fn test_dismiss_notice() {
    let mut h = signed_in_harness().await;
    assert_eq!(h.shell.notices().items().len(), 1);
    h.shell.dismiss_notice(0);
    assert!(h.shell.notices().is_empty());
}
