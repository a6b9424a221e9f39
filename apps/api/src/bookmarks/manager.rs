//! Bookmark toggling. Two states only: a (seeker, job) pair either has a
//! snapshot row or it doesn't. Toggle-on writes a denormalized copy of the
//! posting; toggle-off physically deletes it. There is no version check, so
//! two concurrent toggles from the same seeker race last-write-wins.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::bookmark::Bookmark;
use crate::models::job::JobPosting;

/// The action a toggle takes, decided purely from whether a snapshot row
/// already exists for the (seeker, job) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    /// No row yet: snapshot the live posting; the new state is bookmarked.
    Save,
    /// Row exists: delete it; the new state is not bookmarked.
    Remove,
}

impl ToggleAction {
    /// The bookmarked flag reported back to the caller after the action runs.
    pub fn resulting_state(self) -> bool {
        matches!(self, ToggleAction::Save)
    }
}

pub fn toggle_action(already_bookmarked: bool) -> ToggleAction {
    if already_bookmarked {
        ToggleAction::Remove
    } else {
        ToggleAction::Save
    }
}

/// Flips the bookmark state for (seeker, job) and returns the new state:
/// `true` when the toggle created a bookmark, `false` when it removed one.
pub async fn toggle_bookmark(
    pool: &PgPool,
    seeker_id: Uuid,
    job_id: Uuid,
) -> Result<bool, AppError> {
    let existing: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM bookmarks WHERE seeker_id = $1 AND job_id = $2")
            .bind(seeker_id)
            .bind(job_id)
            .fetch_optional(pool)
            .await?;

    let action = toggle_action(existing.is_some());
    if action == ToggleAction::Remove {
        sqlx::query("DELETE FROM bookmarks WHERE seeker_id = $1 AND job_id = $2")
            .bind(seeker_id)
            .bind(job_id)
            .execute(pool)
            .await?;
        return Ok(action.resulting_state());
    }

    // Toggle-on needs the live posting to snapshot from.
    let job: JobPosting = sqlx::query_as("SELECT * FROM job_postings WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No job posting {job_id}")))?;

    let bookmark = Bookmark::snapshot_of(seeker_id, &job);
    sqlx::query(
        r#"
        INSERT INTO bookmarks
            (seeker_id, job_id, employer_id, title, field, location, salary,
             job_type, company_name, date_posted, bookmarked_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(bookmark.seeker_id)
    .bind(bookmark.job_id)
    .bind(bookmark.employer_id)
    .bind(&bookmark.title)
    .bind(&bookmark.field)
    .bind(&bookmark.location)
    .bind(bookmark.salary)
    .bind(&bookmark.job_type)
    .bind(&bookmark.company_name)
    .bind(bookmark.date_posted)
    .bind(bookmark.bookmarked_at)
    .execute(pool)
    .await?;

    Ok(action.resulting_state())
}

/// Returns the seeker's saved snapshots, newest first. No join against live
/// postings: the snapshot is the source of truth here, and the original job
/// may no longer exist.
pub async fn list_bookmarks(pool: &PgPool, seeker_id: Uuid) -> Result<Vec<Bookmark>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM bookmarks WHERE seeker_id = $1 ORDER BY bookmarked_at DESC")
        .bind(seeker_id)
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Applies the decided action to an in-memory bookmarked flag and returns
    /// what the caller would be told, mirroring `toggle_bookmark`.
    fn apply_toggle(bookmarked: &mut bool) -> bool {
        let action = toggle_action(*bookmarked);
        *bookmarked = action.resulting_state();
        *bookmarked
    }

    #[test]
    fn test_toggle_on_saves_and_toggle_off_removes() {
        assert_eq!(toggle_action(false), ToggleAction::Save);
        assert_eq!(toggle_action(true), ToggleAction::Remove);
        assert!(ToggleAction::Save.resulting_state());
        assert!(!ToggleAction::Remove.resulting_state());
    }

    #[test]
    fn test_double_toggle_returns_to_original_state() {
        for start in [false, true] {
            let mut bookmarked = start;
            let first = apply_toggle(&mut bookmarked);
            assert_eq!(first, !start);
            let second = apply_toggle(&mut bookmarked);
            assert_eq!(second, start);
            assert_eq!(bookmarked, start);
        }
    }

    #[test]
    fn test_reported_state_always_matches_stored_state() {
        let mut bookmarked = false;
        for _ in 0..5 {
            let reported = apply_toggle(&mut bookmarked);
            assert_eq!(reported, bookmarked);
        }
    }
}
