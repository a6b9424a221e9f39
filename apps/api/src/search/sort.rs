//! Listing-side sort, applied downstream of the filter scan. Two
//! user-selectable comparators; ties preserve fetch order (stable sort).

use serde::Deserialize;

use crate::models::job::JobWithEmployer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Case-insensitive alphabetical by title (A-Z).
    #[default]
    Alphabetical,
    /// Most recently posted first.
    #[serde(alias = "date")]
    DatePosted,
}

pub fn sort_listings(listings: &mut [JobWithEmployer], key: SortKey) {
    match key {
        SortKey::Alphabetical => listings.sort_by(|a, b| {
            a.job
                .title
                .to_lowercase()
                .cmp(&b.job.title.to_lowercase())
        }),
        SortKey::DatePosted => {
            listings.sort_by(|a, b| b.job.date_posted.cmp(&a.job.date_posted))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employer::EmployerRef;
    use crate::models::job::JobPosting;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn make_listing(title: &str, days_ago: i64) -> JobWithEmployer {
        JobWithEmployer {
            job: JobPosting {
                id: Uuid::new_v4(),
                employer_id: Uuid::new_v4(),
                title: title.to_string(),
                description: "desc".to_string(),
                field: "Engineering".to_string(),
                location: "Auckland".to_string(),
                salary: 100,
                job_type: "Full-time".to_string(),
                qualifications: vec![],
                experiences: vec![],
                responsibilities: vec![],
                questions: vec![],
                date_posted: Utc::now() - Duration::days(days_ago),
                num_applications: 0,
                num_applications_last_week: 0,
                company_name: "Acme Ltd".to_string(),
            },
            employer: EmployerRef {
                id: Uuid::new_v4(),
                company_name: "Acme Ltd".to_string(),
                logo_url: None,
            },
        }
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let mut listings = vec![
            make_listing("zookeeper", 0),
            make_listing("Accountant", 0),
            make_listing("barista", 0),
        ];
        sort_listings(&mut listings, SortKey::Alphabetical);
        let titles: Vec<&str> = listings.iter().map(|l| l.job.title.as_str()).collect();
        assert_eq!(titles, vec!["Accountant", "barista", "zookeeper"]);
    }

    #[test]
    fn test_date_posted_is_newest_first() {
        let mut listings = vec![
            make_listing("Old", 10),
            make_listing("New", 0),
            make_listing("Middle", 5),
        ];
        sort_listings(&mut listings, SortKey::DatePosted);
        let titles: Vec<&str> = listings.iter().map(|l| l.job.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Middle", "Old"]);
    }

    #[test]
    fn test_equal_titles_preserve_fetch_order() {
        let mut listings = vec![
            make_listing("Engineer", 3),
            make_listing("Engineer", 1),
            make_listing("Engineer", 2),
        ];
        let fetch_order: Vec<Uuid> = listings.iter().map(|l| l.job.id).collect();
        sort_listings(&mut listings, SortKey::Alphabetical);
        let sorted_order: Vec<Uuid> = listings.iter().map(|l| l.job.id).collect();
        assert_eq!(sorted_order, fetch_order);
    }

    #[test]
    fn test_default_sort_is_alphabetical() {
        assert_eq!(SortKey::default(), SortKey::Alphabetical);
    }
}
