//! Session domain
//!
//! Models the authenticated identity and the sign-in/sign-up/sign-out
//! lifecycle against an external identity provider. The provider itself is
//! consumed through the [`IdentityPort`] trait; this crate only tracks which
//! identity, if any, is currently active.

pub mod session;
pub mod store;
pub mod ports;
pub mod error;

pub use session::{Session, AuthPhase};
pub use store::SessionStore;
pub use ports::{IdentityPort, SignUpOutcome};
pub use error::AuthError;
