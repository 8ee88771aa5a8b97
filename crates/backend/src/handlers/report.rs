use axum::http::StatusCode;
use axum::Json;
use contracts::report::{
    AiAnalysisRequest, AiAnalysisResponse, GenerateReportRequest, GenerateReportResponse,
};
use serde_json::json;

use crate::report::service::{self, ReportError};

fn error_status(e: &ReportError) -> StatusCode {
    match e {
        ReportError::UnknownSector(_) => StatusCode::NOT_FOUND,
        ReportError::AiDisabled => StatusCode::SERVICE_UNAVAILABLE,
        ReportError::AiFailed(_) => StatusCode::BAD_GATEWAY,
        ReportError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// POST /api/manager/ai-analysis (protected)
pub async fn ai_analysis(
    Json(request): Json<AiAnalysisRequest>,
) -> Result<Json<AiAnalysisResponse>, (StatusCode, Json<serde_json::Value>)> {
    match service::ai_analysis(&request.sector_id).await {
        Ok(text) => Ok(Json(AiAnalysisResponse { text })),
        Err(e) => {
            tracing::warn!("AI analysis failed: {e}");
            Err((error_status(&e), Json(json!({ "message": e.to_string() }))))
        }
    }
}

/// POST /api/manager/report (protected)
pub async fn generate(
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, (StatusCode, Json<serde_json::Value>)> {
    match service::generate(
        &request.sector_id,
        request.include_ai_summary,
        request.ai_summary_text,
    )
    .await
    {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::error!("Report generation failed: {e}");
            Err((error_status(&e), Json(json!({ "message": e.to_string() }))))
        }
    }
}
