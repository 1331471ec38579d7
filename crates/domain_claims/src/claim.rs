//! Claim records and submission payloads

use chrono::{DateTime, Utc};
use core_kernel::{ClaimId, Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Claim status
///
/// The backend assigns `pending` at insert; approval and rejection happen
/// through an administrative path and are only ever read here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    /// Capitalized label for display badges
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            other => Err(ClaimError::Fetch(format!("unknown claim status: {other}"))),
        }
    }
}

/// One insurance claim record
///
/// Immutable from the client's perspective except for `status`, which only
/// the backend changes. Never deleted or edited client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Backend-assigned identifier
    pub id: ClaimId,
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
    /// Non-negative claimed amount in the portal currency
    pub cost: Decimal,
    pub status: ClaimStatus,
    /// Opaque storage path of the supporting document, if one was attached
    pub document_path: Option<String>,
    /// Assigned by the backend at insert time
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// The claimed amount as Money in the portal currency
    pub fn cost_money(&self) -> Money {
        Money::new(self.cost, Currency::INR)
    }
}

/// Payload for submitting a new claim
///
/// Already validated by the shell's form layer; `validate` re-checks the
/// domain invariants so a repository caller can never insert garbage.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
    pub cost: Decimal,
}

impl NewClaim {
    /// Checks the required-field and cost invariants
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.patient_name.trim().is_empty() {
            return Err(ClaimError::validation("patient name is required"));
        }
        if self.diagnosis.trim().is_empty() {
            return Err(ClaimError::validation("diagnosis is required"));
        }
        if self.treatment.trim().is_empty() {
            return Err(ClaimError::validation("treatment is required"));
        }
        if self.cost.is_sign_negative() && !self.cost.is_zero() {
            return Err(ClaimError::validation("cost must not be negative"));
        }
        Ok(())
    }
}

/// A supporting document selected for upload
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// Original file name as selected, used only for its extension
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Lowercased extension of the original file name, if any
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
