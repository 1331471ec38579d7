//! View models
//!
//! Presentation-ready snapshots derived from shell state. Costs are
//! formatted with the currency symbol and thousands grouping, statuses as
//! capitalized labels, and dates as `dd/mm/yyyy`.

use domain_claims::Claim;

/// The page rendered for the current auth state
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Marketing landing page with login/signup entry points
    Landing(LandingView),
    /// Authenticated claims dashboard
    Dashboard(DashboardView),
}

/// A feature highlight card on the landing page
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// Landing page state
#[derive(Debug, Clone, PartialEq)]
pub struct LandingView {
    pub login_open: bool,
    pub signup_open: bool,
    pub features: Vec<FeatureCard>,
}

/// The fixed set of landing page feature cards
pub fn feature_cards() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Secure Integration",
            description: "Bank-grade security with ABHA integration for seamless health record access",
        },
        FeatureCard {
            title: "Automated Verification",
            description: "Instant document verification and validation through ABHA database",
        },
        FeatureCard {
            title: "Smart Processing",
            description: "AI-powered claim processing with minimal manual intervention",
        },
        FeatureCard {
            title: "Faster Processing",
            description: "Reduced claim settlement time from weeks to days",
        },
        FeatureCard {
            title: "Accuracy Assured",
            description: "Eliminate manual errors with automated data validation",
        },
        FeatureCard {
            title: "Digital Documentation",
            description: "Paperless claims with digital health records from ABHA",
        },
    ]
}

/// One row of the dashboard claims table
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimRowView {
    pub patient: String,
    pub treatment: String,
    /// Grouped cost with currency symbol, e.g. `₹5,000`
    pub cost: String,
    /// Capitalized status label
    pub status: String,
    /// Submission date as `dd/mm/yyyy`
    pub submitted_on: String,
}

impl ClaimRowView {
    pub fn from_claim(claim: &Claim) -> Self {
        Self {
            patient: claim.patient_name.clone(),
            treatment: claim.treatment.clone(),
            cost: claim.cost_money().display_grouped(),
            status: claim.status.label().to_string(),
            submitted_on: claim.created_at.format("%d/%m/%Y").to_string(),
        }
    }
}

/// Dashboard state
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Display name from the session profile
    pub welcome_name: String,
    /// Current ABHA search input
    pub abha_query: String,
    /// Whether a claims fetch is in flight
    pub loading: bool,
    pub new_claim_open: bool,
    pub rows: Vec<ClaimRowView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::ClaimId;
    use domain_claims::ClaimStatus;
    use rust_decimal::Decimal;

    #[test]
    fn test_claim_row_formatting() {
        let claim = Claim {
            id: ClaimId::new(),
            patient_name: "Asha Rao".to_string(),
            diagnosis: "Fracture".to_string(),
            treatment: "Cast".to_string(),
            cost: Decimal::new(500000, 2),
            status: ClaimStatus::Pending,
            document_path: None,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        };
        let row = ClaimRowView::from_claim(&claim);
        assert_eq!(row.cost, "₹5,000");
        assert_eq!(row.status, "Pending");
        assert_eq!(row.submitted_on, "15/01/2025");
    }

    #[test]
    fn test_feature_cards_are_six() {
        assert_eq!(feature_cards().len(), 6);
    }
}
