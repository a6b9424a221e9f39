use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status assigned to every new application. The column is free-form so
/// employers can define later stages; no workflow advances it yet.
pub const STATUS_APPLIED: &str = "Applied";

/// One seeker's submission against one job posting.
///
/// Dual-written: under the employer (`candidates`, for review) and under the
/// seeker (`applied_jobs`, for self-service history). Both copies are
/// denormalized snapshots of the job and profile at application time and are
/// not updated if either source changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRecord {
    pub employer_id: Uuid,
    pub job_id: Uuid,
    pub seeker_id: Uuid,
    pub name: String,
    pub resume_url: String,
    /// Inline cover letter text, or a blob URL if one was uploaded.
    pub cover_letter: String,
    pub status: String,
    pub skills: Vec<String>,
    pub applied_role: String,
    pub company_name: String,
    pub application_date: DateTime<Utc>,
    pub date_posted: DateTime<Utc>,
}
