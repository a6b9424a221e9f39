use std::sync::Arc;

use sqlx::PgPool;

use crate::blob::BlobStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable blob backend for resumes, cover letters, and branding assets.
    /// Default: S3/MinIO. Swap behind the trait for tests.
    pub blob: Arc<dyn BlobStore>,
    pub config: Config,
}
