//! Claims domain
//!
//! Models insurance claim records as read from the managed backend table,
//! the payload for submitting a new claim, and the repository that wires the
//! two-phase submit (document upload, then row insert). The backend itself is
//! reached through the port traits in [`ports`]; adapters live in
//! `infra_provider`.

pub mod claim;
pub mod repository;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimStatus, NewClaim, Attachment};
pub use repository::ClaimRepository;
pub use ports::{ClaimsTablePort, DocumentStorePort, ChangeFeedPort, FeedSubscription, ChangeEvent, ClaimInsert};
pub use error::ClaimError;
