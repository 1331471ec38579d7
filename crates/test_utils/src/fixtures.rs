//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent and
//! predictable so assertions can use literal values.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{ClaimId, UserId};
use domain_claims::{Attachment, Claim, ClaimStatus, NewClaim};
use domain_session::Session;
use rust_decimal_macros::dec;

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The reference submission scenario: fracture claim, no document
    pub fn asha_fracture() -> NewClaim {
        NewClaim {
            patient_name: "Asha Rao".to_string(),
            diagnosis: "Fracture".to_string(),
            treatment: "Cast".to_string(),
            cost: dec!(5000),
        }
    }

    /// A stored claim row as the backend would return it
    pub fn stored_pending() -> Claim {
        Claim {
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

    /// A small PDF attachment
    pub fn pdf_attachment() -> Attachment {
        Attachment {
            file_name: "discharge-summary.pdf".to_string(),
            bytes: b"%PDF-1.4 test".to_vec(),
        }
    }
}

/// Fixture for session test data
pub struct SessionFixtures;

impl SessionFixtures {
    /// An active session for the standard test identity
    pub fn asha() -> Session {
        Session {
            user_id: UserId::new(),
            email: "asha@example.com".to_string(),
            full_name: "Asha Rao".to_string(),
            access_token: "test-access-token".to_string(),
            expires_at: None,
        }
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Base timestamp all relative offsets hang off (Jan 1, 2025)
    pub fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }
}
