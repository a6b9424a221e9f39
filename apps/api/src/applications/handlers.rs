use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use crate::applications::workflow::{apply, ApplyRequest};
use crate::errors::AppError;
use crate::identity::resolver::require_seeker;
use crate::models::application::ApplicationRecord;
use crate::state::AppState;

/// POST /api/v1/applications
pub async fn handle_apply(
    State(state): State<AppState>,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationRecord>), AppError> {
    let record = apply(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/seekers/:id/applications
///
/// The seeker's self-service history. Rows are denormalized snapshots and
/// stay readable after the source posting is edited or deleted.
pub async fn handle_list_applied_jobs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ApplicationRecord>>, AppError> {
    let seeker = require_seeker(&state.db, id).await?;

    let records: Vec<ApplicationRecord> = sqlx::query_as(
        "SELECT * FROM applied_jobs WHERE seeker_id = $1 ORDER BY application_date DESC",
    )
    .bind(seeker.id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(records))
}
