use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::employer::candidates::{list_candidates, CandidateList};
use crate::employer::lifecycle::{create_job, delete_job, list_jobs, update_job, JobListing};
use crate::errors::AppError;
use crate::identity::resolver::{lookup_role, require_employer, ResolvedRole};
use crate::models::employer::{EmployerProfile, EmployerRef};
use crate::models::job::{JobForm, JobPosting, JobWithEmployer};
use crate::profile::handlers::{read_upload, UploadResponse};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateEmployerRequest {
    pub principal_id: Uuid,
    pub employer_name: String,
    pub company_name: String,
    pub email: String,
}

/// POST /api/v1/employers
///
/// Creates the employer profile at signup; like the seeker flow, the row is
/// read back before responding so the dashboard can load immediately.
pub async fn handle_create_employer(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployerRequest>,
) -> Result<(StatusCode, Json<EmployerProfile>), AppError> {
    if req.employer_name.trim().is_empty() {
        return Err(AppError::Validation("employer_name is required".to_string()));
    }
    if req.company_name.trim().is_empty() {
        return Err(AppError::Validation("company_name is required".to_string()));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    if !matches!(
        lookup_role(&state.db, req.principal_id).await?,
        ResolvedRole::Unclassified
    ) {
        return Err(AppError::Validation(
            "account already has a profile".to_string(),
        ));
    }

    sqlx::query(
        "INSERT INTO employers (id, employer_name, company_name, email) VALUES ($1, $2, $3, $4)",
    )
    .bind(req.principal_id)
    .bind(&req.employer_name)
    .bind(&req.company_name)
    .bind(&req.email)
    .execute(&state.db)
    .await?;

    let profile: EmployerProfile = sqlx::query_as("SELECT * FROM employers WHERE id = $1")
        .bind(req.principal_id)
        .fetch_one(&state.db)
        .await?;

    tracing::info!("Created employer profile {}", profile.id);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/employers/:id
pub async fn handle_get_employer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployerProfile>, AppError> {
    let profile: EmployerProfile = sqlx::query_as("SELECT * FROM employers WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No employer profile for {id}")))?;
    Ok(Json(profile))
}

/// POST /api/v1/employers/:id/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<JobForm>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    let employer = require_employer(&state.db, id).await?;
    let job = create_job(&state.db, &employer, form).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/v1/employers/:id/jobs/:job_id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
    Json(form): Json<JobForm>,
) -> Result<Json<JobPosting>, AppError> {
    let employer = require_employer(&state.db, id).await?;
    let job = update_job(&state.db, employer.id, job_id, form).await?;
    Ok(Json(job))
}

/// DELETE /api/v1/employers/:id/jobs/:job_id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path((id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let employer = require_employer(&state.db, id).await?;
    delete_job(&state.db, employer.id, job_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/employers/:id/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    let employer = require_employer(&state.db, id).await?;
    let listings = list_jobs(&state.db, employer.id).await?;
    Ok(Json(listings))
}

/// GET /api/v1/employers/:employer_id/jobs/:job_id
///
/// Public job detail for the apply screen. Returns 404 once the posting is
/// deleted; snapshot holders treat that as expected, not fatal.
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path((employer_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<JobWithEmployer>, AppError> {
    let employer: EmployerProfile = sqlx::query_as("SELECT * FROM employers WHERE id = $1")
        .bind(employer_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No employer profile for {employer_id}")))?;

    let job: JobPosting =
        sqlx::query_as("SELECT * FROM job_postings WHERE id = $1 AND employer_id = $2")
            .bind(job_id)
            .bind(employer_id)
            .fetch_optional(&state.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No job posting {job_id}")))?;

    Ok(Json(JobWithEmployer {
        job,
        employer: EmployerRef::from(&employer),
    }))
}

#[derive(Deserialize)]
pub struct CandidateQuery {
    pub role: Option<String>,
}

/// GET /api/v1/employers/:id/candidates?role=
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<CandidateQuery>,
) -> Result<Json<CandidateList>, AppError> {
    let employer = require_employer(&state.db, id).await?;
    let list = list_candidates(&state.db, employer.id, params.role.as_deref()).await?;
    Ok(Json(list))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Logo,
    Banner,
}

impl AssetKind {
    fn column(self) -> &'static str {
        match self {
            AssetKind::Logo => "logo_url",
            AssetKind::Banner => "banner_url",
        }
    }

    fn path_segment(self) -> &'static str {
        match self {
            AssetKind::Logo => "logos",
            AssetKind::Banner => "banners",
        }
    }
}

#[derive(Deserialize)]
pub struct AssetQuery {
    pub kind: AssetKind,
}

/// POST /api/v1/employers/:id/assets?kind=logo|banner
pub async fn handle_upload_asset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<AssetQuery>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let employer = require_employer(&state.db, id).await?;

    let kind = params.kind;
    let (filename, content_type, bytes) = read_upload(multipart).await?;

    let key = format!("employers/{}/{}/{}", employer.id, kind.path_segment(), filename);
    let url = state.blob.put(&key, bytes, &content_type).await?;

    // Column name comes from the AssetKind enum, never from user input.
    let query = format!("UPDATE employers SET {} = $2 WHERE id = $1", kind.column());
    sqlx::query(&query)
        .bind(employer.id)
        .bind(&url)
        .execute(&state.db)
        .await?;

    Ok(Json(UploadResponse { url }))
}
