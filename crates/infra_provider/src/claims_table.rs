//! Claims table adapter
//!
//! Implements `ClaimsTablePort` against the provider's managed Postgres
//! table. The backend assigns the identifier, the `pending` status default,
//! and the creation timestamp (see `migrations/0001_claims.sql`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::ClaimId;
use domain_claims::{Claim, ClaimError, ClaimInsert, ClaimStatus, ClaimsTablePort};

use crate::error::ProviderError;

/// Adapter over the managed `claims` table
#[derive(Debug, Clone)]
pub struct PgClaimsTable {
    pool: PgPool,
}

impl PgClaimsTable {
    /// Creates a new adapter with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClaimsTablePort for PgClaimsTable {
    async fn select_all(&self) -> Result<Vec<Claim>, ClaimError> {
        let rows = sqlx::query_as::<_, ClaimRecord>(
            r#"
            SELECT id, patient_name, diagnosis, treatment, cost, status, document_url, created_at
            FROM claims
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProviderError::from(e).into_fetch())?;

        rows.into_iter().map(Claim::try_from).collect()
    }

    async fn insert(&self, row: ClaimInsert) -> Result<Claim, ClaimError> {
        let record = sqlx::query_as::<_, ClaimRecord>(
            r#"
            INSERT INTO claims (patient_name, diagnosis, treatment, cost, document_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, patient_name, diagnosis, treatment, cost, status, document_url, created_at
            "#,
        )
        .bind(&row.patient_name)
        .bind(&row.diagnosis)
        .bind(&row.treatment)
        .bind(row.cost)
        .bind(&row.document_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProviderError::from(e).into_insert())?;

        Claim::try_from(record)
    }
}

/// Raw database row for a claim
#[derive(Debug, sqlx::FromRow)]
struct ClaimRecord {
    id: Uuid,
    patient_name: String,
    diagnosis: String,
    treatment: String,
    cost: Decimal,
    status: String,
    document_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ClaimRecord> for Claim {
    type Error = ClaimError;

    fn try_from(record: ClaimRecord) -> Result<Self, Self::Error> {
        let status: ClaimStatus = record.status.parse()?;
        Ok(Claim {
            id: ClaimId::from_uuid(record.id),
            patient_name: record.patient_name,
            diagnosis: record.diagnosis,
            treatment: record.treatment,
            cost: record.cost,
            status,
            document_path: record.document_url,
            created_at: record.created_at,
        })
    }
}
