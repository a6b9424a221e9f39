use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobWithEmployer;
use crate::search::engine::{search, SearchCriteria};
use crate::search::sort::{sort_listings, SortKey};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub work_type: String,
    #[serde(default)]
    pub min_salary: String,
    pub sort: Option<SortKey>,
}

/// GET /api/v1/jobs/search
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<JobWithEmployer>>, AppError> {
    let criteria = SearchCriteria {
        keyword: params.keyword,
        location: params.location,
        work_type: params.work_type,
        min_salary: params.min_salary,
    };

    let mut listings = search(&state.db, &criteria).await?;
    sort_listings(&mut listings, params.sort.unwrap_or_default());
    Ok(Json(listings))
}
