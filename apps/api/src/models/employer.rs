use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employer's profile document. One per employer account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployerProfile {
    pub id: Uuid,
    pub employer_name: String,
    pub company_name: String,
    pub email: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The slice of employer data attached to search results and job details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployerRef {
    pub id: Uuid,
    pub company_name: String,
    pub logo_url: Option<String>,
}

impl From<&EmployerProfile> for EmployerRef {
    fn from(profile: &EmployerProfile) -> Self {
        EmployerRef {
            id: profile.id,
            company_name: profile.company_name.clone(),
            logo_url: profile.logo_url.clone(),
        }
    }
}
