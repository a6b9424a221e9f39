//! Search/filter engine: four independent predicates ANDed over every job
//! posting of every employer.
//!
//! This is a full O(employers × jobs) scan on every search, with no index or
//! pagination. Acceptable at the current scale; a scalability boundary if
//! reused beyond it.

use serde::Deserialize;
use sqlx::PgPool;

use crate::catalog::bands::parse_salary_band;
use crate::models::employer::{EmployerProfile, EmployerRef};
use crate::models::job::{JobPosting, JobWithEmployer};

/// Sentinel value the location filter control submits when no city is chosen.
pub const LOCATION_SENTINEL: &str = "Select City";

/// Filter criteria. Every field uses an empty string as "match everything",
/// mirroring the filter controls that feed it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub min_salary: String,
}

/// Returns true iff the posting passes all four predicates:
/// - keyword: blank matches all; otherwise case-insensitive substring match
///   against the title only (never the description);
/// - location: blank or the "Select City" sentinel matches all; otherwise
///   exact equality;
/// - work type: blank matches all; otherwise exact equality;
/// - minimum salary: blank matches all; otherwise the posting's band must be
///   at or above the floor. A non-blank floor that fails to parse matches
///   nothing.
pub fn matches(criteria: &SearchCriteria, job: &JobPosting) -> bool {
    let keyword_match = criteria.keyword.is_empty()
        || job
            .title
            .to_lowercase()
            .contains(&criteria.keyword.to_lowercase());

    let location_match = criteria.location.is_empty()
        || criteria.location == LOCATION_SENTINEL
        || job.location == criteria.location;

    let work_type_match = criteria.work_type.is_empty() || job.job_type == criteria.work_type;

    let salary_match = if criteria.min_salary.trim().is_empty() {
        true
    } else {
        match parse_salary_band(&criteria.min_salary) {
            Some(floor) => job.salary >= floor,
            None => false,
        }
    };

    keyword_match && location_match && work_type_match && salary_match
}

/// Scans every employer's postings and returns the matching subset, paired
/// with each posting's employer details. Unordered; callers sort downstream.
pub async fn search(
    pool: &PgPool,
    criteria: &SearchCriteria,
) -> Result<Vec<JobWithEmployer>, sqlx::Error> {
    let employers: Vec<EmployerProfile> = sqlx::query_as("SELECT * FROM employers")
        .fetch_all(pool)
        .await?;

    let mut results = Vec::new();
    for employer in &employers {
        let jobs: Vec<JobPosting> =
            sqlx::query_as("SELECT * FROM job_postings WHERE employer_id = $1")
                .bind(employer.id)
                .fetch_all(pool)
                .await?;

        for job in jobs {
            if matches(criteria, &job) {
                results.push(JobWithEmployer {
                    job,
                    employer: EmployerRef::from(employer),
                });
            }
        }
    }

    Ok(results)
}
