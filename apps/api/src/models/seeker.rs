use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job seeker's profile document. One per seeker account; the row's
/// presence is what classifies a principal as a seeker (see `identity`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SeekerProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub resume_url: Option<String>,
    pub cover_letter_url: Option<String>,
    pub profile_picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SeekerProfile {
    /// Display name as it appears on candidate records.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// The resume URL, if one is actually on file (empty strings don't count).
    pub fn resume_on_file(&self) -> Option<&str> {
        self.resume_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}
