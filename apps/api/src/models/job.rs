use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::employer::EmployerRef;

/// A job advertisement, owned by exactly one employer.
///
/// `salary` is the raw band value in thousands (displayed as "120k",
/// "350k+"). `num_applications` is monotonically incremented by the apply
/// workflow and never decremented.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub description: String,
    pub field: String,
    pub location: String,
    pub salary: i32,
    pub job_type: String,
    pub qualifications: Vec<String>,
    pub experiences: Vec<String>,
    pub responsibilities: Vec<String>,
    pub questions: Vec<String>,
    pub date_posted: DateTime<Utc>,
    pub num_applications: i32,
    pub num_applications_last_week: i32,
    pub company_name: String,
}

/// The fields an employer supplies when creating or editing a posting.
/// Everything here is required; see `employer::lifecycle::validate_job_form`.
#[derive(Debug, Clone, Deserialize)]
pub struct JobForm {
    pub title: String,
    pub description: String,
    pub field: String,
    pub location: String,
    pub salary: i32,
    pub job_type: String,
    pub qualifications: Vec<String>,
    pub experiences: Vec<String>,
    pub responsibilities: Vec<String>,
    pub questions: Vec<String>,
}

/// A posting paired with its owning employer's public details, as returned
/// by search and listing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct JobWithEmployer {
    #[serde(flatten)]
    pub job: JobPosting,
    pub employer: EmployerRef,
}
