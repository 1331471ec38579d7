//! Change-feed subscriber task
//!
//! Bridges the realtime change feed to the shell: a background task holds
//! the subscription and pushes a refresh command for every row change. The
//! handle must be closed on shutdown so the provider-side listener is torn
//! down rather than leaked.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use domain_claims::{ChangeFeedPort, ClaimError};

use crate::shell::ShellCommand;

/// Handle to the running subscriber task
pub struct FeedHandle {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Closes the subscription and waits for the task to finish
    pub async fn close(self) {
        let _ = self.shutdown.send(());
        if let Err(err) = self.task.await {
            warn!(error = %err, "Change-feed task did not shut down cleanly");
        }
    }
}

/// Subscribes to the change feed and forwards every event as a refresh
///
/// The subscription is opened before the task is spawned so a subscribe
/// failure surfaces immediately to the caller. The task ends when the feed
/// closes, the command channel is dropped, or the handle is closed.
pub async fn spawn_change_feed(
    feed: Arc<dyn ChangeFeedPort>,
    commands: mpsc::Sender<ShellCommand>,
) -> Result<FeedHandle, ClaimError> {
    let mut subscription = feed.subscribe().await?;
    info!("Subscribed to claims change feed");

    let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = &mut shutdown_rx => {
                    break;
                }
                event = subscription.next_event() => {
                    match event {
                        Some(event) => {
                            debug!(?event, "Claims change observed");
                            if commands.send(ShellCommand::RefreshClaims).await.is_err() {
                                break;
                            }
                        }
                        None => {
                            info!("Claims change feed ended");
                            break;
                        }
                    }
                }
            }
        }

        if let Err(err) = subscription.close().await {
            warn!(error = %err, "Failed to close change-feed subscription");
        }
    });

    Ok(FeedHandle {
        shutdown: shutdown_tx,
        task,
    })
}
