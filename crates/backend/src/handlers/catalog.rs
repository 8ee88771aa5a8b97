use axum::{extract::Path, Json};
use contracts::catalog::{Catalog, Sector};

use crate::catalog;

/// GET /api/catalog
pub async fn get_catalog() -> Json<Catalog> {
    Json(catalog::get_catalog().clone())
}

/// GET /api/catalog/sector/:id
pub async fn get_sector(Path(id): Path<String>) -> Result<Json<Sector>, axum::http::StatusCode> {
    match catalog::get_sector(&id) {
        Some(sector) => Ok(Json(sector.clone())),
        None => Err(axum::http::StatusCode::NOT_FOUND),
    }
}
