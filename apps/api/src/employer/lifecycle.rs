//! Employer job lifecycle: create, edit, delete, list. All writes go through
//! form validation first; a rejected form produces a field-level message and
//! touches nothing.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employer::EmployerProfile;
use crate::models::job::{JobForm, JobPosting};

/// Every field of the job form is required. Lists must carry at least one
/// non-blank entry.
pub fn validate_job_form(form: &JobForm) -> Result<(), AppError> {
    required_text("title", &form.title)?;
    required_text("description", &form.description)?;
    required_text("field", &form.field)?;
    required_text("location", &form.location)?;
    if form.salary <= 0 {
        return Err(AppError::Validation("salary is required".to_string()));
    }
    required_text("job_type", &form.job_type)?;
    required_list("qualifications", &form.qualifications)?;
    required_list("experiences", &form.experiences)?;
    required_list("responsibilities", &form.responsibilities)?;
    required_list("questions", &form.questions)?;
    Ok(())
}

fn required_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn required_list(field: &str, values: &[String]) -> Result<(), AppError> {
    if values.iter().all(|v| v.trim().is_empty()) {
        return Err(AppError::Validation(format!(
            "{field} must have at least one entry"
        )));
    }
    Ok(())
}

/// Creates a posting with fresh counters. `company_name` is copied from the
/// employer profile, not taken from the form.
pub async fn create_job(
    pool: &PgPool,
    employer: &EmployerProfile,
    form: JobForm,
) -> Result<JobPosting, AppError> {
    validate_job_form(&form)?;

    let job: JobPosting = sqlx::query_as(
        r#"
        INSERT INTO job_postings
            (id, employer_id, title, description, field, location, salary, job_type,
             qualifications, experiences, responsibilities, questions,
             date_posted, num_applications, num_applications_last_week, company_name)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now(), 0, 0, $13)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(employer.id)
    .bind(&form.title)
    .bind(&form.description)
    .bind(&form.field)
    .bind(&form.location)
    .bind(form.salary)
    .bind(&form.job_type)
    .bind(&form.qualifications)
    .bind(&form.experiences)
    .bind(&form.responsibilities)
    .bind(&form.questions)
    .bind(&employer.company_name)
    .fetch_one(pool)
    .await?;

    tracing::info!("Employer {} created job {} ({})", employer.id, job.id, job.title);
    Ok(job)
}

/// Merges the form into an existing posting. Counters and `date_posted` are
/// left untouched; only the apply workflow moves `num_applications`.
pub async fn update_job(
    pool: &PgPool,
    employer_id: Uuid,
    job_id: Uuid,
    form: JobForm,
) -> Result<JobPosting, AppError> {
    validate_job_form(&form)?;

    let job: Option<JobPosting> = sqlx::query_as(
        r#"
        UPDATE job_postings
        SET title = $3, description = $4, field = $5, location = $6, salary = $7,
            job_type = $8, qualifications = $9, experiences = $10,
            responsibilities = $11, questions = $12
        WHERE id = $1 AND employer_id = $2
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(employer_id)
    .bind(&form.title)
    .bind(&form.description)
    .bind(&form.field)
    .bind(&form.location)
    .bind(form.salary)
    .bind(&form.job_type)
    .bind(&form.qualifications)
    .bind(&form.experiences)
    .bind(&form.responsibilities)
    .bind(&form.questions)
    .fetch_optional(pool)
    .await?;

    job.ok_or_else(|| AppError::NotFound(format!("No job posting {job_id}")))
}

/// Removes a posting. Bookmark and application snapshots are denormalized
/// copies and are intentionally left in place; their holders treat a live
/// lookup of this id as best-effort from now on.
pub async fn delete_job(pool: &PgPool, employer_id: Uuid, job_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM job_postings WHERE id = $1 AND employer_id = $2")
        .bind(job_id)
        .bind(employer_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("No job posting {job_id}")));
    }
    tracing::info!("Employer {employer_id} deleted job {job_id}");
    Ok(())
}

/// A posting plus its rolling last-seven-days application count, derived
/// from candidate records at read time rather than maintained as a counter.
#[derive(Debug, Serialize)]
pub struct JobListing {
    #[serde(flatten)]
    pub job: JobPosting,
    pub applications_last_week: i64,
}

pub async fn list_jobs(pool: &PgPool, employer_id: Uuid) -> Result<Vec<JobListing>, sqlx::Error> {
    let jobs: Vec<JobPosting> = sqlx::query_as(
        "SELECT * FROM job_postings WHERE employer_id = $1 ORDER BY date_posted DESC",
    )
    .bind(employer_id)
    .fetch_all(pool)
    .await?;

    let mut listings = Vec::with_capacity(jobs.len());
    for job in jobs {
        let applications_last_week: i64 = sqlx::query_scalar(
            r#"
            SELECT count(*) FROM candidates
            WHERE employer_id = $1 AND job_id = $2
              AND application_date > now() - interval '7 days'
            "#,
        )
        .bind(employer_id)
        .bind(job.id)
        .fetch_one(pool)
        .await?;

        listings.push(JobListing {
            job,
            applications_last_week,
        });
    }

    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> JobForm {
        JobForm {
            title: "Backend Engineer".to_string(),
            description: "Build and run the API".to_string(),
            field: "Engineering".to_string(),
            location: "Auckland".to_string(),
            salary: 130,
            job_type: "Full-time".to_string(),
            qualifications: vec!["BSc or equivalent".to_string()],
            experiences: vec!["3+ years backend".to_string()],
            responsibilities: vec!["Own the service".to_string()],
            questions: vec!["Why this role?".to_string()],
        }
    }

    fn error_message(form: &JobForm) -> String {
        match validate_job_form(form) {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(validate_job_form(&full_form()).is_ok());
    }

    #[test]
    fn test_each_text_field_is_required_with_field_level_message() {
        let mut form = full_form();
        form.title = "  ".to_string();
        assert_eq!(error_message(&form), "title is required");

        let mut form = full_form();
        form.description = String::new();
        assert_eq!(error_message(&form), "description is required");

        let mut form = full_form();
        form.field = String::new();
        assert_eq!(error_message(&form), "field is required");

        let mut form = full_form();
        form.location = String::new();
        assert_eq!(error_message(&form), "location is required");

        let mut form = full_form();
        form.job_type = String::new();
        assert_eq!(error_message(&form), "job_type is required");
    }

    #[test]
    fn test_salary_must_be_positive() {
        let mut form = full_form();
        form.salary = 0;
        assert_eq!(error_message(&form), "salary is required");
    }

    #[test]
    fn test_each_list_needs_a_non_blank_entry() {
        for (name, mutate) in [
            ("qualifications", (|f: &mut JobForm| f.qualifications.clear()) as fn(&mut JobForm)),
            ("experiences", |f| f.experiences.clear()),
            ("responsibilities", |f| f.responsibilities.clear()),
            ("questions", |f| f.questions.clear()),
        ] {
            let mut form = full_form();
            mutate(&mut form);
            assert_eq!(error_message(&form), format!("{name} must have at least one entry"));
        }
    }

    #[test]
    fn test_list_of_blank_strings_is_rejected() {
        let mut form = full_form();
        form.qualifications = vec!["".to_string(), "   ".to_string()];
        assert_eq!(
            error_message(&form),
            "qualifications must have at least one entry"
        );
    }
}
