//! MedClaim Portal Binary
//!
//! Headless driver for the claims portal shell: connects to the backend
//! project, opens the realtime change feed, and processes refresh commands
//! until shutdown.
//!
//! # Environment Variables
//!
//! * `MEDCLAIM_DATABASE_URL` - PostgreSQL connection string
//! * `MEDCLAIM_PROVIDER_URL` - Base URL of the hosted backend project
//! * `MEDCLAIM_PROVIDER_API_KEY` - Project API key
//! * `MEDCLAIM_PROVIDER_JWT_SECRET` - JWT secret for local token decoding (optional)
//! * `MEDCLAIM_STORAGE_BUCKET` - Bucket for claim documents (default: claim-documents)
//! * `MEDCLAIM_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `MEDCLAIM_EMAIL` / `MEDCLAIM_PASSWORD` - Credentials to sign in with at startup (optional)

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app_shell::{spawn_change_feed, AppConfig, Shell};
use domain_claims::ClaimRepository;
use domain_session::SessionStore;
use infra_provider::{
    create_pool_from_url, IdentityConfig, PgChangeFeed, PgClaimsTable, RestIdentityProvider,
    RestObjectStore, StorageConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(provider = %config.provider_url, "Starting MedClaim portal");

    let pool = create_pool_from_url(&config.database_url).await?;

    let identity = Arc::new(RestIdentityProvider::new(IdentityConfig {
        base_url: config.provider_url.clone(),
        api_key: config.provider_api_key.clone(),
        jwt_secret: config.provider_jwt_secret.clone(),
    }));
    let table = Arc::new(PgClaimsTable::new(pool.clone()));
    let documents = Arc::new(RestObjectStore::new(StorageConfig {
        base_url: config.provider_url.clone(),
        api_key: config.provider_api_key.clone(),
        bucket: config.storage_bucket.clone(),
    }));
    let feed = Arc::new(PgChangeFeed::new(pool));

    let sessions = SessionStore::new(identity);
    let repo = ClaimRepository::new(table, documents);
    let mut shell = Shell::new(sessions, repo);

    let (commands_tx, mut commands_rx) = mpsc::channel(16);
    let feed_handle = spawn_change_feed(feed, commands_tx).await?;

    sign_in_from_env(&mut shell).await;

    loop {
        tokio::select! {
            command = commands_rx.recv() => {
                match command {
                    Some(command) => shell.handle_command(command).await,
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, shutting down");
                break;
            }
        }
    }

    feed_handle.close().await;
    shell.sign_out().await;

    tracing::info!("Portal shutdown complete");
    Ok(())
}

/// Loads portal configuration from environment variables
///
/// Falls back to individual env vars or defaults when the prefixed set is
/// incomplete.
fn load_config() -> AppConfig {
    AppConfig::from_env().unwrap_or_else(|_| AppConfig {
        database_url: std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("MEDCLAIM_DATABASE_URL"))
            .unwrap_or_else(|_| "postgres://localhost/medclaim".to_string()),
        provider_url: std::env::var("MEDCLAIM_PROVIDER_URL")
            .unwrap_or_else(|_| "http://localhost:54321".to_string()),
        provider_api_key: std::env::var("MEDCLAIM_PROVIDER_API_KEY").unwrap_or_default(),
        provider_jwt_secret: std::env::var("MEDCLAIM_PROVIDER_JWT_SECRET").ok(),
        storage_bucket: std::env::var("MEDCLAIM_STORAGE_BUCKET")
            .unwrap_or_else(|_| StorageConfig::DEFAULT_BUCKET.to_string()),
        log_level: std::env::var("MEDCLAIM_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Signs in with `MEDCLAIM_EMAIL`/`MEDCLAIM_PASSWORD` when both are set
async fn sign_in_from_env(shell: &mut Shell) {
    let (Ok(email), Ok(password)) = (
        std::env::var("MEDCLAIM_EMAIL"),
        std::env::var("MEDCLAIM_PASSWORD"),
    ) else {
        return;
    };

    shell.open_login();
    let form = shell.login_form_mut();
    form.email = email;
    form.password = password;
    shell.submit_login().await;

    match shell.session() {
        Some(session) => tracing::info!(email = %session.email, "Startup sign-in complete"),
        None => tracing::warn!("Startup sign-in failed; portal stays anonymous"),
    }
}
