//! Test Utilities Crate
//!
//! Shared test infrastructure for the claims portal test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for claims and sessions
//! - `builders`: Builder patterns for test data construction
//! - `fakes`: In-memory fake providers implementing the domain ports
//! - `generators`: Random test identities

pub mod fixtures;
pub mod builders;
pub mod fakes;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use fakes::*;
pub use generators::*;
