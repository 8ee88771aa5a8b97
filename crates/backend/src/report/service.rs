use chrono::Utc;
use contracts::report::{
    build_ai_prompt, build_report, report_file_name, GenerateReportResponse,
};
use thiserror::Error;

use super::pdf;
use crate::catalog;
use crate::shared::llm;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("sector not found: {0}")]
    UnknownSector(String),

    #[error("AI analysis is disabled: no API key configured")]
    AiDisabled,

    #[error("AI analysis failed: {0}")]
    AiFailed(String),

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

/// Run the text-generation collaborator over the sector snapshot.
pub async fn ai_analysis(sector_id: &str) -> Result<String, ReportError> {
    let sector = catalog::get_sector(sector_id)
        .ok_or_else(|| ReportError::UnknownSector(sector_id.to_string()))?;

    let provider = llm::provider().ok_or(ReportError::AiDisabled)?;
    let prompt = build_ai_prompt(sector);

    provider
        .generate(&prompt)
        .await
        .map_err(|e| ReportError::AiFailed(e.to_string()))
}

/// Assemble and render the sector report.
///
/// When an AI summary was requested but none was supplied, one is generated
/// here; if that generation fails the report is still produced without it
/// (partial-failure policy) and the response says so.
pub async fn generate(
    sector_id: &str,
    include_ai_summary: bool,
    ai_summary_text: Option<String>,
) -> Result<GenerateReportResponse, ReportError> {
    let sector = catalog::get_sector(sector_id)
        .ok_or_else(|| ReportError::UnknownSector(sector_id.to_string()))?;

    let ai_text = if include_ai_summary {
        match ai_summary_text {
            Some(text) if !text.trim().is_empty() => Some(text),
            _ => match ai_analysis(sector_id).await {
                Ok(text) => Some(text),
                Err(e) => {
                    tracing::warn!("Report proceeds without AI summary: {e}");
                    None
                }
            },
        }
    } else {
        None
    };

    let now = Utc::now();
    let generated_at_label = now.format("%d/%m/%Y %H:%M:%S").to_string();

    let document = build_report(
        sector,
        include_ai_summary,
        ai_text.as_deref(),
        &generated_at_label,
    );
    let bytes = pdf::render(&document)?;

    Ok(GenerateReportResponse {
        data_url: pdf::to_data_url(&bytes),
        file_name: report_file_name(&sector.id, now.date_naive()),
        ai_summary_included: ai_text.is_some(),
    })
}
