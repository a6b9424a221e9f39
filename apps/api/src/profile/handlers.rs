use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::resolver::{lookup_role, ResolvedRole};
use crate::models::seeker::SeekerProfile;
use crate::profile::completeness::{profile_completeness, CompletenessReport};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateSeekerRequest {
    pub principal_id: Uuid,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
}

/// POST /api/v1/seekers
///
/// Creates the seeker profile at signup. The insert is confirmed by reading
/// the row back before responding, so the caller can navigate to the seeker
/// dashboard without polling for the document to appear.
pub async fn handle_create_seeker(
    State(state): State<AppState>,
    Json(req): Json<CreateSeekerRequest>,
) -> Result<(StatusCode, Json<SeekerProfile>), AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".to_string()));
    }

    // An id must resolve to at most one role.
    if !matches!(
        lookup_role(&state.db, req.principal_id).await?,
        ResolvedRole::Unclassified
    ) {
        return Err(AppError::Validation(
            "account already has a profile".to_string(),
        ));
    }

    sqlx::query(
        "INSERT INTO seekers (id, first_name, last_name, email) VALUES ($1, $2, $3, $4)",
    )
    .bind(req.principal_id)
    .bind(&req.first_name)
    .bind(&req.last_name)
    .bind(&req.email)
    .execute(&state.db)
    .await?;

    let profile: SeekerProfile = sqlx::query_as("SELECT * FROM seekers WHERE id = $1")
        .bind(req.principal_id)
        .fetch_one(&state.db)
        .await?;

    tracing::info!("Created seeker profile {}", profile.id);
    Ok((StatusCode::CREATED, Json(profile)))
}

#[derive(Serialize)]
pub struct SeekerResponse {
    pub profile: SeekerProfile,
    pub completeness: CompletenessReport,
}

/// GET /api/v1/seekers/:id
pub async fn handle_get_seeker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SeekerResponse>, AppError> {
    let profile: SeekerProfile = sqlx::query_as("SELECT * FROM seekers WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No seeker profile for {id}")))?;

    let completeness = profile_completeness(&profile);
    Ok(Json(SeekerResponse {
        profile,
        completeness,
    }))
}

#[derive(Deserialize)]
pub struct UpdateSeekerRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub skills: Option<Vec<String>>,
}

/// PATCH /api/v1/seekers/:id
///
/// Merge-updates the editable profile fields; omitted fields are untouched.
pub async fn handle_update_seeker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSeekerRequest>,
) -> Result<Json<SeekerResponse>, AppError> {
    let profile: Option<SeekerProfile> = sqlx::query_as(
        r#"
        UPDATE seekers
        SET first_name = COALESCE($2, first_name),
            last_name  = COALESCE($3, last_name),
            skills     = COALESCE($4, skills)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(req.first_name)
    .bind(req.last_name)
    .bind(req.skills)
    .fetch_optional(&state.db)
    .await?;

    let profile = profile.ok_or_else(|| AppError::NotFound(format!("No seeker profile for {id}")))?;
    let completeness = profile_completeness(&profile);
    Ok(Json(SeekerResponse {
        profile,
        completeness,
    }))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Resume,
    CoverLetter,
    ProfilePicture,
}

impl DocumentKind {
    fn column(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume_url",
            DocumentKind::CoverLetter => "cover_letter_url",
            DocumentKind::ProfilePicture => "profile_picture_url",
        }
    }

    fn path_segment(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resumes",
            DocumentKind::CoverLetter => "cover-letters",
            DocumentKind::ProfilePicture => "profile-pictures",
        }
    }

    /// Resumes and cover letters must be documents; pictures are unchecked.
    fn accepts(self, filename: &str) -> bool {
        match self {
            DocumentKind::Resume | DocumentKind::CoverLetter => {
                let lower = filename.to_lowercase();
                lower.ends_with(".pdf") || lower.ends_with(".docx")
            }
            DocumentKind::ProfilePicture => true,
        }
    }
}

#[derive(Deserialize)]
pub struct DocumentQuery {
    pub kind: DocumentKind,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/seekers/:id/documents?kind=resume|cover_letter|profile_picture
///
/// Uploads the file to the blob store and records the resulting URL on the
/// profile, mirroring the upload-then-record flow of the settings and apply
/// screens.
pub async fn handle_upload_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DocumentQuery>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    // Profile must exist before we accept bytes.
    let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM seekers WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    if exists.is_none() {
        return Err(AppError::NotFound(format!("No seeker profile for {id}")));
    }

    let kind = params.kind;
    let (filename, content_type, bytes) = read_upload(multipart).await?;
    if !kind.accepts(&filename) {
        return Err(AppError::Validation(
            "unsupported file type; upload a .pdf or .docx".to_string(),
        ));
    }

    let key = format!("seekers/{}/{}/{}", id, kind.path_segment(), filename);
    let url = state.blob.put(&key, bytes, &content_type).await?;

    // Column name comes from the DocumentKind enum, never from user input.
    let query = format!("UPDATE seekers SET {} = $2 WHERE id = $1", kind.column());
    sqlx::query(&query)
        .bind(id)
        .bind(&url)
        .execute(&state.db)
        .await?;

    Ok(Json(UploadResponse { url }))
}

/// Pulls the single file field out of a multipart body.
pub(crate) async fn read_upload(
    mut multipart: Multipart,
) -> Result<(String, String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        if field.file_name().is_none() {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
        return Ok((filename, content_type, bytes));
    }

    Err(AppError::Validation("a file field is required".to_string()))
}
