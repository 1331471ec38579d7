//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and use defaults for the rest.

use chrono::{DateTime, Duration, Utc};
use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimStatus};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::TemporalFixtures;

/// Builder for stored claim rows
pub struct TestClaimBuilder {
    id: ClaimId,
    patient_name: String,
    diagnosis: String,
    treatment: String,
    cost: Decimal,
    status: ClaimStatus,
    document_path: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimId::new(),
            patient_name: "Asha Rao".to_string(),
            diagnosis: "Fracture".to_string(),
            treatment: "Cast".to_string(),
            cost: dec!(5000),
            status: ClaimStatus::Pending,
            document_path: None,
            created_at: TemporalFixtures::base_time(),
        }
    }

    /// Sets the patient name
    pub fn with_patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    /// Sets the treatment
    pub fn with_treatment(mut self, treatment: impl Into<String>) -> Self {
        self.treatment = treatment.into();
        self
    }

    /// Sets the claimed cost
    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the document path
    pub fn with_document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    /// Sets the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Offsets the creation timestamp from the fixture base time
    pub fn created_seconds_after_base(mut self, seconds: i64) -> Self {
        self.created_at = TemporalFixtures::base_time() + Duration::seconds(seconds);
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            patient_name: self.patient_name,
            diagnosis: self.diagnosis,
            treatment: self.treatment,
            cost: self.cost,
            status: self.status,
            document_path: self.document_path,
            created_at: self.created_at,
        }
    }
}
