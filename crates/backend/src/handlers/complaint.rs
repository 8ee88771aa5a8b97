use axum::http::StatusCode;
use axum::Json;
use contracts::complaint::{
    ComplaintRecord, SubmitComplaintRequest, SubmitComplaintResponse, ValidationIssue,
};
use serde_json::json;

use crate::domain::complaint::service::{self, SubmitError};

/// POST /api/complaint
///
/// 422 carries the full list of per-field issues so the form can show
/// every violation at once.
pub async fn submit(
    Json(request): Json<SubmitComplaintRequest>,
) -> Result<Json<SubmitComplaintResponse>, (StatusCode, Json<serde_json::Value>)> {
    match service::submit(&request.sector_id, &request.draft, None).await {
        Ok(response) => Ok(Json(response)),
        Err(SubmitError::Validation(err)) => {
            let issues: Vec<ValidationIssue> = err.0;
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "issues": issues })),
            ))
        }
        Err(SubmitError::UnknownSector(id)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("Setor desconhecido: {id}") })),
        )),
        Err(SubmitError::Persistence(e)) => {
            tracing::error!("Complaint persistence failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Erro ao enviar reclamação." })),
            ))
        }
    }
}

/// GET /api/complaints (protected)
pub async fn list_recent() -> Result<Json<Vec<ComplaintRecord>>, StatusCode> {
    match service::list_recent().await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            tracing::error!("Failed to load complaints: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
