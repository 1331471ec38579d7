//! Claim repository
//!
//! CRUD-style access to the remote claims collection: list, and a two-phase
//! create that uploads the supporting document before inserting the row.

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::claim::{Attachment, Claim, NewClaim};
use crate::error::ClaimError;
use crate::ports::{ClaimInsert, ClaimsTablePort, DocumentStorePort};

/// Repository over the claims table and the document store
#[derive(Clone)]
pub struct ClaimRepository {
    table: Arc<dyn ClaimsTablePort>,
    documents: Arc<dyn DocumentStorePort>,
}

impl ClaimRepository {
    pub fn new(table: Arc<dyn ClaimsTablePort>, documents: Arc<dyn DocumentStorePort>) -> Self {
        Self { table, documents }
    }

    /// Fetches all claims, most recent first
    ///
    /// Ordering is enforced here regardless of what the adapter returns, so
    /// every caller sees creation time descending.
    pub async fn list(&self) -> Result<Vec<Claim>, ClaimError> {
        let mut claims = self.table.select_all().await?;
        claims.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        debug!(count = claims.len(), "Fetched claims");
        Ok(claims)
    }

    /// Submits a new claim
    ///
    /// Two phases: if a document is attached it is uploaded first under a
    /// random object name (original extension preserved), then the row is
    /// inserted with the resulting path. An upload failure aborts before the
    /// insert. An insert failure after a successful upload leaves the stored
    /// object orphaned; there is no compensating delete, the path is only
    /// logged so an operator can reap it.
    pub async fn create(
        &self,
        claim: NewClaim,
        attachment: Option<Attachment>,
    ) -> Result<Claim, ClaimError> {
        claim.validate()?;

        let document_path = match attachment {
            Some(attachment) => Some(self.upload_document(attachment).await?),
            None => None,
        };

        let row = ClaimInsert {
            patient_name: claim.patient_name,
            diagnosis: claim.diagnosis,
            treatment: claim.treatment,
            cost: claim.cost,
            document_path: document_path.clone(),
        };

        match self.table.insert(row).await {
            Ok(created) => Ok(created),
            Err(err) => {
                if let Some(path) = document_path {
                    warn!(%path, "Claim insert failed after upload; stored document is orphaned");
                }
                Err(err)
            }
        }
    }

    async fn upload_document(&self, attachment: Attachment) -> Result<String, ClaimError> {
        let object_name = match attachment.extension() {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };
        self.documents.upload(&object_name, attachment.bytes).await
    }
}
