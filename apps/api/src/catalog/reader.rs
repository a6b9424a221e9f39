//! Reference vocabulary reads. These populate the search filter controls and
//! the employer job form: cities, work types, fields, and salary bands.

use serde::Serialize;
use sqlx::PgPool;

use crate::catalog::bands::format_salary_band;

#[derive(Debug, Serialize)]
pub struct Catalog {
    pub locations: Vec<String>,
    pub work_types: Vec<String>,
    pub fields: Vec<String>,
    /// Display-formatted, ascending ("45k" .. "350k+").
    pub salary_bands: Vec<String>,
}

pub async fn load_catalog(pool: &PgPool) -> Result<Catalog, sqlx::Error> {
    let locations: Vec<String> = sqlx::query_scalar("SELECT city FROM locations ORDER BY city ASC")
        .fetch_all(pool)
        .await?;

    let work_types: Vec<String> = sqlx::query_scalar("SELECT kind FROM work_types ORDER BY kind ASC")
        .fetch_all(pool)
        .await?;

    let fields: Vec<String> = sqlx::query_scalar("SELECT name FROM fields ORDER BY name ASC")
        .fetch_all(pool)
        .await?;

    let bands: Vec<i32> = sqlx::query_scalar("SELECT band FROM salary_bands ORDER BY band ASC")
        .fetch_all(pool)
        .await?;

    Ok(Catalog {
        locations,
        work_types,
        fields,
        salary_bands: bands.into_iter().map(format_salary_band).collect(),
    })
}
