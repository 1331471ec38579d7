//! Change feed adapter
//!
//! Implements `ChangeFeedPort` over Postgres LISTEN/NOTIFY. A trigger on the
//! claims table (see `migrations/0001_claims.sql`) NOTIFYs the
//! `claims_changes` channel with a JSON payload carrying the row action;
//! each notification becomes one [`ChangeEvent`]. Delivery is best-effort,
//! which is all the consumer needs since every event triggers a full
//! re-fetch.

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tracing::{debug, warn};

use domain_claims::{ChangeEvent, ChangeFeedPort, ClaimError, FeedSubscription};

use crate::error::ProviderError;

/// Notification channel the claims trigger publishes on
pub const CLAIMS_CHANNEL: &str = "claims_changes";

/// Change feed over the provider's Postgres instance
#[derive(Debug, Clone)]
pub struct PgChangeFeed {
    pool: PgPool,
}

impl PgChangeFeed {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChangeFeedPort for PgChangeFeed {
    async fn subscribe(&self) -> Result<Box<dyn FeedSubscription>, ClaimError> {
        let mut listener = PgListener::connect_with(&self.pool)
            .await
            .map_err(|e| ProviderError::from(e).into_fetch())?;
        listener
            .listen(CLAIMS_CHANNEL)
            .await
            .map_err(|e| ProviderError::from(e).into_fetch())?;

        debug!(channel = CLAIMS_CHANNEL, "Change feed subscription opened");
        Ok(Box::new(PgFeedSubscription {
            listener,
            closed: false,
        }))
    }
}

struct PgFeedSubscription {
    listener: PgListener,
    closed: bool,
}

/// Payload shape emitted by the claims notify trigger
#[derive(Debug, Deserialize)]
struct ChangePayload {
    action: String,
}

impl ChangePayload {
    fn event(&self) -> Option<ChangeEvent> {
        match self.action.as_str() {
            "INSERT" => Some(ChangeEvent::Inserted),
            "UPDATE" => Some(ChangeEvent::Updated),
            "DELETE" => Some(ChangeEvent::Deleted),
            _ => None,
        }
    }
}

#[async_trait]
impl FeedSubscription for PgFeedSubscription {
    async fn next_event(&mut self) -> Option<ChangeEvent> {
        if self.closed {
            return None;
        }
        loop {
            match self.listener.recv().await {
                Ok(notification) => {
                    match serde_json::from_str::<ChangePayload>(notification.payload()) {
                        Ok(payload) => {
                            if let Some(event) = payload.event() {
                                return Some(event);
                            }
                            warn!(payload = notification.payload(), "Unknown change action");
                        }
                        Err(err) => {
                            warn!(error = %err, "Malformed change notification payload");
                        }
                    }
                }
                Err(err) => {
                    warn!(error = %err, "Change feed connection lost");
                    return None;
                }
            }
        }
    }

    async fn close(&mut self) -> Result<(), ClaimError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.listener
            .unlisten_all()
            .await
            .map_err(|e| ProviderError::from(e).into_fetch())?;
        debug!(channel = CLAIMS_CHANNEL, "Change feed subscription closed");
        Ok(())
    }
}
