use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bookmarks::manager::{list_bookmarks, toggle_bookmark};
use crate::errors::AppError;
use crate::identity::resolver::require_seeker;
use crate::models::bookmark::Bookmark;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ToggleRequest {
    pub job_id: Uuid,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub bookmarked: bool,
}

/// POST /api/v1/seekers/:id/bookmarks/toggle
///
/// Unauthenticated or non-seeker principals are rejected before any state
/// change; the 401 is the server-side analog of the "please log in before
/// bookmarking jobs" prompt.
pub async fn handle_toggle_bookmark(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let seeker = require_seeker(&state.db, id).await?;
    let bookmarked = toggle_bookmark(&state.db, seeker.id, req.job_id).await?;
    Ok(Json(ToggleResponse { bookmarked }))
}

/// GET /api/v1/seekers/:id/bookmarks
pub async fn handle_list_bookmarks(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Bookmark>>, AppError> {
    let seeker = require_seeker(&state.db, id).await?;
    let bookmarks = list_bookmarks(&state.db, seeker.id).await?;
    Ok(Json(bookmarks))
}
