use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::catalog::bands::parse_salary_band;
use crate::catalog::reader::{load_catalog, Catalog};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/catalog
pub async fn handle_get_catalog(
    State(state): State<AppState>,
) -> Result<Json<Catalog>, AppError> {
    let catalog = load_catalog(&state.db).await?;
    Ok(Json(catalog))
}

#[derive(Deserialize)]
pub struct CatalogEntry {
    pub value: String,
}

/// POST /api/v1/catalog/:kind
///
/// Appends a reference entry to one of the four vocabularies. Duplicate
/// entries are ignored rather than rejected.
pub async fn handle_add_catalog_entry(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(entry): Json<CatalogEntry>,
) -> Result<StatusCode, AppError> {
    let value = entry.value.trim();
    if value.is_empty() {
        return Err(AppError::Validation("value is required".to_string()));
    }

    match kind.as_str() {
        "locations" => {
            sqlx::query("INSERT INTO locations (city) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(value)
                .execute(&state.db)
                .await?;
        }
        "work_types" => {
            sqlx::query("INSERT INTO work_types (kind) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(value)
                .execute(&state.db)
                .await?;
        }
        "fields" => {
            sqlx::query("INSERT INTO fields (name) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(value)
                .execute(&state.db)
                .await?;
        }
        "salary_bands" => {
            let band = parse_salary_band(value).ok_or_else(|| {
                AppError::Validation("salary band must be numeric, e.g. 120 or 120k".to_string())
            })?;
            sqlx::query("INSERT INTO salary_bands (band) VALUES ($1) ON CONFLICT DO NOTHING")
                .bind(band)
                .execute(&state.db)
                .await?;
        }
        other => {
            return Err(AppError::Validation(format!(
                "unknown catalog kind '{other}'"
            )))
        }
    }

    Ok(StatusCode::CREATED)
}
