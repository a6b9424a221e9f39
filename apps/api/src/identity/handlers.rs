use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::identity::resolver::{resolve_role, ResolvedRole};
use crate::models::employer::EmployerProfile;
use crate::models::seeker::SeekerProfile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct IdentityResponse {
    pub role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeker: Option<SeekerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer: Option<EmployerProfile>,
}

/// GET /api/v1/identity/:principal_id
///
/// Resolved once at session start by the caller; the response says which
/// dashboard (if any) the principal may see. Never answers before the
/// lookups complete, so gated views cannot render against a null role.
pub async fn handle_resolve_identity(
    State(state): State<AppState>,
    Path(principal_id): Path<Uuid>,
) -> Result<Json<IdentityResponse>, AppError> {
    let response = match resolve_role(&state.db, principal_id).await {
        ResolvedRole::Seeker(profile) => IdentityResponse {
            role: "seeker",
            seeker: Some(profile),
            employer: None,
        },
        ResolvedRole::Employer(profile) => IdentityResponse {
            role: "employer",
            seeker: None,
            employer: Some(profile),
        },
        ResolvedRole::Unclassified => IdentityResponse {
            role: "none",
            seeker: None,
            employer: None,
        },
    };
    Ok(Json(response))
}
