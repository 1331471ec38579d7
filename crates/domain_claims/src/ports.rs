//! Claims backend ports
//!
//! The managed claims table, the object store, and the realtime change feed
//! are external provider services consumed through these traits. Adapters
//! live in `infra_provider`; tests use in-memory fakes.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::claim::Claim;
use crate::error::ClaimError;

/// Row payload for an insert into the claims table
///
/// The backend assigns the identifier, the `pending` status, and the
/// creation timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimInsert {
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
    pub cost: Decimal,
    pub document_path: Option<String>,
}

/// Port for the managed claims table
#[async_trait]
pub trait ClaimsTablePort: Send + Sync {
    /// Reads every claim row; ordering is up to the adapter
    async fn select_all(&self) -> Result<Vec<Claim>, ClaimError>;

    /// Inserts one row and returns it with backend-assigned fields
    async fn insert(&self, row: ClaimInsert) -> Result<Claim, ClaimError>;
}

/// Port for the object store holding claim documents
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Stores the bytes under the given object name and returns the path
    /// reference to record on the claim row
    async fn upload(&self, object_name: &str, bytes: Vec<u8>) -> Result<String, ClaimError>;
}

/// A row-level change on the claims collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    Inserted,
    Updated,
    Deleted,
}

/// An open subscription on the change feed
///
/// Must be explicitly closed when the consumer unmounts; a subscription left
/// open leaks a background listener on the provider side.
#[async_trait]
pub trait FeedSubscription: Send {
    /// Waits for the next change event; `None` once the feed ends
    async fn next_event(&mut self) -> Option<ChangeEvent>;

    /// Closes the subscription; no further events are delivered
    async fn close(&mut self) -> Result<(), ClaimError>;
}

/// Port for the realtime change feed on the claims collection
#[async_trait]
pub trait ChangeFeedPort: Send + Sync {
    /// Opens a subscription scoped to insert/update/delete events
    async fn subscribe(&self) -> Result<Box<dyn FeedSubscription>, ClaimError>;
}
