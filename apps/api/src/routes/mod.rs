pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;
use crate::{applications, bookmarks, catalog, employer, identity, profile, search};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Identity
        .route(
            "/api/v1/identity/:principal_id",
            get(identity::handlers::handle_resolve_identity),
        )
        // Catalog
        .route("/api/v1/catalog", get(catalog::handlers::handle_get_catalog))
        .route(
            "/api/v1/catalog/:kind",
            post(catalog::handlers::handle_add_catalog_entry),
        )
        // Search
        .route("/api/v1/jobs/search", get(search::handlers::handle_search_jobs))
        // Seeker profiles and documents
        .route("/api/v1/seekers", post(profile::handlers::handle_create_seeker))
        .route(
            "/api/v1/seekers/:id",
            get(profile::handlers::handle_get_seeker),
        )
        .route(
            "/api/v1/seekers/:id",
            patch(profile::handlers::handle_update_seeker),
        )
        .route(
            "/api/v1/seekers/:id/documents",
            post(profile::handlers::handle_upload_document),
        )
        // Applications
        .route(
            "/api/v1/applications",
            post(applications::handlers::handle_apply),
        )
        .route(
            "/api/v1/seekers/:id/applications",
            get(applications::handlers::handle_list_applied_jobs),
        )
        // Bookmarks
        .route(
            "/api/v1/seekers/:id/bookmarks/toggle",
            post(bookmarks::handlers::handle_toggle_bookmark),
        )
        .route(
            "/api/v1/seekers/:id/bookmarks",
            get(bookmarks::handlers::handle_list_bookmarks),
        )
        // Employer profiles and assets
        .route(
            "/api/v1/employers",
            post(employer::handlers::handle_create_employer),
        )
        .route(
            "/api/v1/employers/:id",
            get(employer::handlers::handle_get_employer),
        )
        .route(
            "/api/v1/employers/:id/assets",
            post(employer::handlers::handle_upload_asset),
        )
        // Employer job lifecycle
        .route(
            "/api/v1/employers/:id/jobs",
            post(employer::handlers::handle_create_job),
        )
        .route(
            "/api/v1/employers/:id/jobs",
            get(employer::handlers::handle_list_jobs),
        )
        .route(
            "/api/v1/employers/:id/jobs/:job_id",
            get(employer::handlers::handle_get_job),
        )
        .route(
            "/api/v1/employers/:id/jobs/:job_id",
            put(employer::handlers::handle_update_job),
        )
        .route(
            "/api/v1/employers/:id/jobs/:job_id",
            delete(employer::handlers::handle_delete_job),
        )
        // Candidate review
        .route(
            "/api/v1/employers/:id/candidates",
            get(employer::handlers::handle_list_candidates),
        )
        .with_state(state)
}
