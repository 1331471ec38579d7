//! Provider infrastructure layer
//!
//! Implements the domain ports against the external backend-as-a-service:
//!
//! - [`identity`]: hosted identity over its REST API
//! - [`claims_table`]: the managed Postgres claims table over SQLx
//! - [`object_store`]: claim-document storage over its REST API
//! - [`change_feed`]: row-change notifications over Postgres LISTEN/NOTIFY
//!
//! The claims table schema (including the `pending` status default and the
//! notify trigger) lives in `migrations/`; migrations are applied out of
//! band, the client only assumes the schema exists.

pub mod pool;
pub mod error;
pub mod identity;
pub mod claims_table;
pub mod object_store;
pub mod change_feed;

pub use pool::{DatabaseConfig, DatabasePool, create_pool, create_pool_from_url};
pub use error::ProviderError;
pub use identity::{RestIdentityProvider, IdentityConfig};
pub use claims_table::PgClaimsTable;
pub use object_store::{RestObjectStore, StorageConfig};
pub use change_feed::PgChangeFeed;
