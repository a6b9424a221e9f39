//! Profile completeness check. A seeker profile is incomplete when any of
//! first name, last name, a non-empty skill list, or a resume on file is
//! missing; the report drives the "complete your profile" prompt.

use serde::Serialize;

use crate::models::seeker::SeekerProfile;

pub const COMPLETE_PROFILE_PROMPT: &str =
    "Please complete your profile by adding your personal information.";

#[derive(Debug, Serialize)]
pub struct CompletenessReport {
    pub complete: bool,
    pub missing: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'static str>,
}

pub fn profile_completeness(profile: &SeekerProfile) -> CompletenessReport {
    let mut missing = Vec::new();

    if profile.first_name.trim().is_empty() {
        missing.push("first_name");
    }
    if profile.last_name.trim().is_empty() {
        missing.push("last_name");
    }
    if profile.skills.iter().all(|s| s.trim().is_empty()) {
        missing.push("skills");
    }
    if profile.resume_on_file().is_none() {
        missing.push("resume");
    }

    let complete = missing.is_empty();
    CompletenessReport {
        complete,
        missing,
        prompt: (!complete).then_some(COMPLETE_PROFILE_PROMPT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn full_profile() -> SeekerProfile {
        SeekerProfile {
            id: Uuid::new_v4(),
            first_name: "Mere".to_string(),
            last_name: "Kingi".to_string(),
            email: "mere@example.com".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            resume_url: Some("https://blobs.example/resume.pdf".to_string()),
            cover_letter_url: None,
            profile_picture_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_complete_profile_has_no_prompt() {
        let report = profile_completeness(&full_profile());
        assert!(report.complete);
        assert!(report.missing.is_empty());
        assert!(report.prompt.is_none());
    }

    #[test]
    fn test_each_missing_field_triggers_prompt() {
        let mut p = full_profile();
        p.first_name = String::new();
        assert_eq!(profile_completeness(&p).missing, vec!["first_name"]);

        let mut p = full_profile();
        p.last_name = "   ".to_string();
        assert_eq!(profile_completeness(&p).missing, vec!["last_name"]);

        let mut p = full_profile();
        p.skills.clear();
        assert_eq!(profile_completeness(&p).missing, vec!["skills"]);

        let mut p = full_profile();
        p.resume_url = None;
        assert_eq!(profile_completeness(&p).missing, vec!["resume"]);
    }

    #[test]
    fn test_blank_skill_entries_do_not_count() {
        let mut p = full_profile();
        p.skills = vec!["".to_string(), "  ".to_string()];
        let report = profile_completeness(&p);
        assert!(!report.complete);
        assert_eq!(report.missing, vec!["skills"]);
    }

    #[test]
    fn test_empty_resume_url_counts_as_missing() {
        let mut p = full_profile();
        p.resume_url = Some(String::new());
        assert_eq!(profile_completeness(&p).missing, vec!["resume"]);
    }

    #[test]
    fn test_prompt_iff_incomplete() {
        // The prompt must appear if and only if at least one field is missing.
        let complete = profile_completeness(&full_profile());
        assert_eq!(complete.prompt.is_some(), !complete.complete);

        let mut p = full_profile();
        p.first_name = String::new();
        let incomplete = profile_completeness(&p);
        assert_eq!(incomplete.prompt, Some(COMPLETE_PROFILE_PROMPT));
        assert_eq!(incomplete.prompt.is_some(), !incomplete.complete);
    }
}
