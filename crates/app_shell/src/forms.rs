//! Transient form state
//!
//! Raw field values as the user typed them. Validation here is the
//! client-side gate only: required fields, email shape, numeric cost, and
//! permitted document types; everything else is the provider's problem.

use rust_decimal::Decimal;
use validator::{Validate, ValidationErrors};

use domain_claims::{Attachment, ClaimError, NewClaim};

/// Document types accepted for claim attachments
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Login modal state
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email is required"), email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    /// Client-side validation before the provider call
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| first_message(&e))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Signup modal state
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Email is required"), email(message = "Enter a valid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl SignupForm {
    /// Client-side validation before the provider call
    pub fn check(&self) -> Result<(), String> {
        self.validate().map_err(|e| first_message(&e))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A file picked for upload, held in memory until submit
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// New-claim modal state (the draft claim)
///
/// Discarded on successful submit or cancel; kept populated when a submit
/// fails so nothing the user typed is lost.
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct ClaimForm {
    #[validate(length(min = 1, message = "Patient name is required"))]
    pub patient_name: String,
    #[validate(length(min = 1, message = "Diagnosis is required"))]
    pub diagnosis: String,
    #[validate(length(min = 1, message = "Treatment is required"))]
    pub treatment: String,
    /// Cost exactly as typed; parsed on submit
    pub cost: String,
    pub document: Option<SelectedDocument>,
}

impl ClaimForm {
    /// Validates the draft and converts it into the submission payload
    pub fn to_submission(&self) -> Result<(NewClaim, Option<Attachment>), ClaimError> {
        self.validate()
            .map_err(|e| ClaimError::validation(first_message(&e)))?;

        let cost: Decimal = self
            .cost
            .trim()
            .parse()
            .map_err(|_| ClaimError::validation("Cost must be a number"))?;
        if cost.is_sign_negative() && !cost.is_zero() {
            return Err(ClaimError::validation("Cost must not be negative"));
        }

        let attachment = match &self.document {
            Some(document) => {
                let attachment = Attachment {
                    file_name: document.file_name.clone(),
                    bytes: document.bytes.clone(),
                };
                match attachment.extension() {
                    Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => {}
                    _ => {
                        return Err(ClaimError::validation(
                            "Document must be a pdf, jpg, jpeg, or png file",
                        ))
                    }
                }
                Some(attachment)
            }
            None => None,
        };

        let claim = NewClaim {
            patient_name: self.patient_name.clone(),
            diagnosis: self.diagnosis.clone(),
            treatment: self.treatment.clone(),
            cost,
        };
        claim.validate()?;

        Ok((claim, attachment))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flat_map(|field| field.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}
