use contracts::complaint::ComplaintRecord;
use contracts::notify::NotificationPrefs;
use contracts::report::{
    AiAnalysisRequest, AiAnalysisResponse, GenerateReportRequest, GenerateReportResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::api::get_auth_header;

/// Current complaint-feed snapshot, newest first.
pub async fn fetch_complaints() -> Result<Vec<ComplaintRecord>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/complaints", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch complaints: {}", response.status()));
    }

    response
        .json::<Vec<ComplaintRecord>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_preferences() -> Result<NotificationPrefs, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/manager/preferences", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch preferences: {}", response.status()));
    }

    response
        .json::<NotificationPrefs>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn save_preferences(prefs: &NotificationPrefs) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::put(&format!("{}/api/manager/preferences", api_base()))
        .header("Authorization", &auth_header)
        .json(prefs)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save preferences: {}", response.status()));
    }

    Ok(())
}

/// Run the AI analysis for one sector. A 503 means the feature is
/// disabled (no API key configured server-side).
pub async fn ai_analysis(sector_id: String) -> Result<String, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&format!("{}/api/manager/ai-analysis", api_base()))
        .header("Authorization", &auth_header)
        .json(&AiAnalysisRequest { sector_id })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<AiAnalysisResponse>()
            .await
            .map(|r| r.text)
            .map_err(|e| format!("Failed to parse response: {}", e)),
        503 => Err("Chave da API de IA não configurada.".into()),
        status => Err(format!("Erro ao obter análise da IA ({status}).")),
    }
}

pub async fn generate_report(
    request: &GenerateReportRequest,
) -> Result<GenerateReportResponse, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&format!("{}/api/manager/report", api_base()))
        .header("Authorization", &auth_header)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to generate report: {}", response.status()));
    }

    response
        .json::<GenerateReportResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
