use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::JobPosting;

/// A seeker's saved reference to a job posting, stored as a denormalized
/// snapshot taken at bookmark time. The snapshot is an immutable value, not
/// a live reference: it survives later edits or deletion of the posting, and
/// callers displaying it must treat a live lookup of `job_id` as best-effort.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub seeker_id: Uuid,
    pub job_id: Uuid,
    pub employer_id: Uuid,
    pub title: String,
    pub field: String,
    pub location: String,
    pub salary: i32,
    pub job_type: String,
    pub company_name: String,
    pub date_posted: DateTime<Utc>,
    pub bookmarked_at: DateTime<Utc>,
}

impl Bookmark {
    /// Captures the display fields of a posting for a seeker's saved list.
    pub fn snapshot_of(seeker_id: Uuid, job: &JobPosting) -> Self {
        Bookmark {
            seeker_id,
            job_id: job.id,
            employer_id: job.employer_id,
            title: job.title.clone(),
            field: job.field.clone(),
            location: job.location.clone(),
            salary: job.salary,
            job_type: job.job_type.clone(),
            company_name: job.company_name.clone(),
            date_posted: job.date_posted,
            bookmarked_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_job() -> JobPosting {
        JobPosting {
            id: Uuid::new_v4(),
            employer_id: Uuid::new_v4(),
            title: "Site Reliability Engineer".to_string(),
            description: "Keep the lights on".to_string(),
            field: "Engineering".to_string(),
            location: "Wellington".to_string(),
            salary: 140,
            job_type: "Full-time".to_string(),
            qualifications: vec!["BSc".to_string()],
            experiences: vec!["3+ years".to_string()],
            responsibilities: vec!["On-call".to_string()],
            questions: vec!["Why SRE?".to_string()],
            date_posted: Utc::now(),
            num_applications: 7,
            num_applications_last_week: 2,
            company_name: "Acme Ltd".to_string(),
        }
    }

    #[test]
    fn test_snapshot_copies_display_fields() {
        let seeker_id = Uuid::new_v4();
        let job = make_job();
        let bookmark = Bookmark::snapshot_of(seeker_id, &job);

        assert_eq!(bookmark.seeker_id, seeker_id);
        assert_eq!(bookmark.job_id, job.id);
        assert_eq!(bookmark.employer_id, job.employer_id);
        assert_eq!(bookmark.title, job.title);
        assert_eq!(bookmark.salary, job.salary);
        assert_eq!(bookmark.company_name, job.company_name);
        assert_eq!(bookmark.date_posted, job.date_posted);
    }

    #[test]
    fn test_snapshot_is_detached_from_source() {
        let job = make_job();
        let bookmark = Bookmark::snapshot_of(Uuid::new_v4(), &job);
        // Mutating the source after the snapshot must not be observable.
        let mut edited = job.clone();
        edited.title = "Renamed role".to_string();
        assert_ne!(bookmark.title, edited.title);
        assert_eq!(bookmark.title, "Site Reliability Engineer");
    }
}
