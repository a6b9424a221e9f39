//! Apply workflow: precondition checks, snapshot construction, the dual
//! write, and the atomic application counter.
//!
//! The two writes (employer-side candidate record, seeker-side history
//! record) are keyed by deterministic composite keys, so a repeat apply for
//! the same (seeker, job) overwrites instead of duplicating and the whole
//! sequence is safe to retry. They are still two separate statements, not a
//! transaction: a crash between them leaves one copy missing until the next
//! retry.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::{ApplicationRecord, STATUS_APPLIED};
use crate::models::job::JobPosting;
use crate::models::seeker::SeekerProfile;

/// Cover letter source chosen in the apply form: inline text, or a file the
/// seeker uploaded beforehand (resolved to its blob URL).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CoverLetter {
    Written { text: String },
    Uploaded { url: String },
}

impl CoverLetter {
    pub fn into_text(self) -> String {
        match self {
            CoverLetter::Written { text } => text,
            CoverLetter::Uploaded { url } => url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub seeker_id: Uuid,
    pub employer_id: Uuid,
    pub job_id: Uuid,
    pub cover_letter: CoverLetter,
}

/// A resume on file is required before any write happens. Surfaced as a
/// blocking validation message, fully recoverable.
pub fn ensure_resume(seeker: &SeekerProfile) -> Result<String, AppError> {
    seeker
        .resume_on_file()
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Validation(
                "A resume is required before applying. Upload one to your profile first."
                    .to_string(),
            )
        })
}

/// Builds the single application record that gets written to both sides.
pub fn build_application(
    seeker: &SeekerProfile,
    job: &JobPosting,
    resume_url: String,
    cover_letter: String,
    application_date: DateTime<Utc>,
) -> ApplicationRecord {
    ApplicationRecord {
        employer_id: job.employer_id,
        job_id: job.id,
        seeker_id: seeker.id,
        name: seeker.full_name(),
        resume_url,
        cover_letter,
        status: STATUS_APPLIED.to_string(),
        skills: seeker.skills.clone(),
        applied_role: job.title.clone(),
        company_name: job.company_name.clone(),
        application_date,
        date_posted: job.date_posted,
    }
}

/// Runs the full apply flow. On any failure before the writes, nothing is
/// persisted; once the writes start, the upsert keys make a retry converge
/// on the same single record per (seeker, job).
pub async fn apply(pool: &PgPool, req: ApplyRequest) -> Result<ApplicationRecord, AppError> {
    let seeker: SeekerProfile = sqlx::query_as("SELECT * FROM seekers WHERE id = $1")
        .bind(req.seeker_id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let resume_url = ensure_resume(&seeker)?;

    let job: JobPosting = sqlx::query_as("SELECT * FROM job_postings WHERE id = $1")
        .bind(req.job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No job posting {}", req.job_id)))?;

    // Ownership invariant: a posting always carries its employer id. A
    // mismatch against the request means a stale or tampered job reference.
    if job.employer_id != req.employer_id {
        tracing::error!(
            "data integrity: job {} belongs to employer {} but request named {}",
            job.id,
            job.employer_id,
            req.employer_id
        );
        return Err(AppError::Validation(
            "job record does not reference a valid employer".to_string(),
        ));
    }

    let record = build_application(
        &seeker,
        &job,
        resume_url,
        req.cover_letter.into_text(),
        Utc::now(),
    );

    write_candidate_record(pool, "candidates", &record).await?;
    write_candidate_record(pool, "applied_jobs", &record).await?;

    // Atomic increment; never read-modify-write, so concurrent applicants
    // cannot lose updates.
    sqlx::query("UPDATE job_postings SET num_applications = num_applications + 1 WHERE id = $1")
        .bind(job.id)
        .execute(pool)
        .await?;

    tracing::info!(
        "Application recorded: seeker {} -> job {} ({})",
        record.seeker_id,
        record.job_id,
        record.applied_role
    );
    Ok(record)
}

/// Upserts one copy of the record. `candidates` and `applied_jobs` share a
/// column layout; only the primary key differs, and both keys are covered by
/// the conflict target here.
async fn write_candidate_record(
    pool: &PgPool,
    table: &str,
    record: &ApplicationRecord,
) -> Result<(), sqlx::Error> {
    let conflict_key = match table {
        "candidates" => "(employer_id, job_id, seeker_id)",
        _ => "(seeker_id, job_id)",
    };
    let query = format!(
        r#"
        INSERT INTO {table}
            (employer_id, job_id, seeker_id, name, resume_url, cover_letter,
             status, skills, applied_role, company_name, application_date, date_posted)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        ON CONFLICT {conflict_key} DO UPDATE SET
            name = EXCLUDED.name,
            resume_url = EXCLUDED.resume_url,
            cover_letter = EXCLUDED.cover_letter,
            status = EXCLUDED.status,
            skills = EXCLUDED.skills,
            applied_role = EXCLUDED.applied_role,
            company_name = EXCLUDED.company_name,
            application_date = EXCLUDED.application_date,
            date_posted = EXCLUDED.date_posted
        "#
    );

    sqlx::query(&query)
        .bind(record.employer_id)
        .bind(record.job_id)
        .bind(record.seeker_id)
        .bind(&record.name)
        .bind(&record.resume_url)
        .bind(&record.cover_letter)
        .bind(&record.status)
        .bind(&record.skills)
        .bind(&record.applied_role)
        .bind(&record.company_name)
        .bind(record.application_date)
        .bind(record.date_posted)
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_seeker(resume_url: Option<&str>) -> SeekerProfile {
        SeekerProfile {
            id: Uuid::new_v4(),
            first_name: "Aroha".to_string(),
            last_name: "Ngata".to_string(),
            email: "aroha@example.com".to_string(),
            skills: vec!["Rust".to_string(), "Postgres".to_string()],
            resume_url: resume_url.map(str::to_string),
            cover_letter_url: None,
            profile_picture_url: None,
            created_at: Utc::now(),
        }
    }

    fn make_job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            description: "Build the API".to_string(),
            field: "Engineering".to_string(),
            location: "Auckland".to_string(),
            salary: 130,
            job_type: "Full-time".to_string(),
            qualifications: vec!["BSc".to_string()],
            experiences: vec!["3+ years".to_string()],
            responsibilities: vec!["Own services".to_string()],
            questions: vec!["Why us?".to_string()],
            date_posted: Utc::now(),
            num_applications: 4,
            num_applications_last_week: 1,
            company_name: "Acme Ltd".to_string(),
        }
    }

    #[test]
    fn test_missing_resume_rejected_before_any_write() {
        let seeker = make_seeker(None);
        let err = ensure_resume(&seeker).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_blank_resume_url_counts_as_missing() {
        let seeker = make_seeker(Some("   "));
        assert!(ensure_resume(&seeker).is_err());
    }

    #[test]
    fn test_resume_on_file_passes_precondition() {
        let seeker = make_seeker(Some("https://blobs.example/cv.pdf"));
        assert_eq!(
            ensure_resume(&seeker).unwrap(),
            "https://blobs.example/cv.pdf"
        );
    }

    #[test]
    fn test_record_snapshots_profile_and_job() {
        let seeker = make_seeker(Some("https://blobs.example/cv.pdf"));
        let job = make_job();
        let now = Utc::now();

        let record = build_application(
            &seeker,
            &job,
            "https://blobs.example/cv.pdf".to_string(),
            "Dear hiring manager".to_string(),
            now,
        );

        assert_eq!(record.seeker_id, seeker.id);
        assert_eq!(record.job_id, job.id);
        assert_eq!(record.employer_id, job.employer_id);
        assert_eq!(record.name, "Aroha Ngata");
        assert_eq!(record.status, STATUS_APPLIED);
        assert_eq!(record.skills, seeker.skills);
        assert_eq!(record.applied_role, "Backend Engineer");
        assert_eq!(record.company_name, "Acme Ltd");
        assert_eq!(record.application_date, now);
        assert_eq!(record.date_posted, job.date_posted);
    }

    #[test]
    fn test_written_and_uploaded_cover_letters_resolve_to_text() {
        let written = CoverLetter::Written {
            text: "I am a great fit".to_string(),
        };
        assert_eq!(written.into_text(), "I am a great fit");

        let uploaded = CoverLetter::Uploaded {
            url: "https://blobs.example/letter.pdf".to_string(),
        };
        assert_eq!(uploaded.into_text(), "https://blobs.example/letter.pdf");
    }

    #[test]
    fn test_repeat_apply_builds_identical_key() {
        // The composite key (employer, job, seeker) is what makes a second
        // apply overwrite instead of duplicate; both builds must agree on it.
        let seeker = make_seeker(Some("https://blobs.example/cv.pdf"));
        let job = make_job();
        let first = build_application(&seeker, &job, "r".into(), "a".into(), Utc::now());
        let second = build_application(&seeker, &job, "r".into(), "b".into(), Utc::now());
        assert_eq!(
            (first.employer_id, first.job_id, first.seeker_id),
            (second.employer_id, second.job_id, second.seeker_id)
        );
    }
}
