//! Employer-side candidate review: the applications filed under this
//! employer, plus the distinct applied-role vocabulary used to filter them.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::ApplicationRecord;

#[derive(Debug, Serialize)]
pub struct CandidateList {
    /// Distinct roles candidates applied for, for the review filter.
    pub roles: Vec<String>,
    pub candidates: Vec<ApplicationRecord>,
}

pub async fn list_candidates(
    pool: &PgPool,
    employer_id: Uuid,
    role: Option<&str>,
) -> Result<CandidateList, sqlx::Error> {
    let roles: Vec<String> = sqlx::query_scalar(
        "SELECT DISTINCT applied_role FROM candidates WHERE employer_id = $1 ORDER BY applied_role",
    )
    .bind(employer_id)
    .fetch_all(pool)
    .await?;

    let candidates: Vec<ApplicationRecord> = match role {
        Some(role) => {
            sqlx::query_as(
                r#"
                SELECT * FROM candidates
                WHERE employer_id = $1 AND applied_role = $2
                ORDER BY application_date DESC
                "#,
            )
            .bind(employer_id)
            .bind(role)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as(
                "SELECT * FROM candidates WHERE employer_id = $1 ORDER BY application_date DESC",
            )
            .bind(employer_id)
            .fetch_all(pool)
            .await?
        }
    };

    Ok(CandidateList { roles, candidates })
}
