//! Core Kernel - Foundational types for the claims portal
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and display formatting
//! - Strongly-typed identifiers
//! - Common error types

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimId, UserId, DocumentId};
pub use error::CoreError;
