//! Identity resolution. Role is not stored anywhere: a principal is a seeker
//! if a seeker profile exists for its id, an employer if an employer profile
//! does, and unclassified otherwise. An id must resolve to at most one role;
//! the seeker probe runs first and wins.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employer::EmployerProfile;
use crate::models::seeker::SeekerProfile;

/// The resolved account classification, as an explicit tagged union.
/// Resolve once per session and pass it along; don't re-probe ad hoc.
#[derive(Debug, Clone)]
pub enum ResolvedRole {
    Seeker(SeekerProfile),
    Employer(EmployerProfile),
    Unclassified,
}

impl ResolvedRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedRole::Seeker(_) => "seeker",
            ResolvedRole::Employer(_) => "employer",
            ResolvedRole::Unclassified => "none",
        }
    }
}

/// Resolves a principal's role, failing closed: lookup errors are logged and
/// collapse to `Unclassified`, which grants no dashboard access.
pub async fn resolve_role(pool: &PgPool, principal_id: Uuid) -> ResolvedRole {
    match lookup_role(pool, principal_id).await {
        Ok(role) => role,
        Err(e) => {
            tracing::error!("identity lookup failed for {principal_id}: {e}");
            ResolvedRole::Unclassified
        }
    }
}

/// Error-propagating variant used where a lookup failure must surface as a
/// server error instead of silently de-authorizing (e.g. route guards).
pub async fn lookup_role(pool: &PgPool, principal_id: Uuid) -> Result<ResolvedRole, sqlx::Error> {
    let seeker: Option<SeekerProfile> = sqlx::query_as("SELECT * FROM seekers WHERE id = $1")
        .bind(principal_id)
        .fetch_optional(pool)
        .await?;
    if let Some(profile) = seeker {
        return Ok(ResolvedRole::Seeker(profile));
    }

    let employer: Option<EmployerProfile> = sqlx::query_as("SELECT * FROM employers WHERE id = $1")
        .bind(principal_id)
        .fetch_optional(pool)
        .await?;
    if let Some(profile) = employer {
        return Ok(ResolvedRole::Employer(profile));
    }

    Ok(ResolvedRole::Unclassified)
}

/// Route guard for seeker-only operations.
pub async fn require_seeker(pool: &PgPool, principal_id: Uuid) -> Result<SeekerProfile, AppError> {
    match lookup_role(pool, principal_id).await? {
        ResolvedRole::Seeker(profile) => Ok(profile),
        ResolvedRole::Employer(_) => Err(AppError::Forbidden),
        ResolvedRole::Unclassified => Err(AppError::Unauthorized),
    }
}

/// Route guard for employer-only operations.
pub async fn require_employer(
    pool: &PgPool,
    principal_id: Uuid,
) -> Result<EmployerProfile, AppError> {
    match lookup_role(pool, principal_id).await? {
        ResolvedRole::Employer(profile) => Ok(profile),
        ResolvedRole::Seeker(_) => Err(AppError::Forbidden),
        ResolvedRole::Unclassified => Err(AppError::Unauthorized),
    }
}
