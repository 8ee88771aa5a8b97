use chrono::Utc;
use contracts::complaint::{
    validate, ComplaintDraft, ComplaintRecord, SubmitComplaintResponse, ValidationError,
};
use thiserror::Error;

use super::repository;
use crate::catalog;
use crate::shared::data::db::try_get_connection;

// ============================================================================
// HTML sanitization
// ============================================================================

/// A descrição vai direto para o feed do gestor: nenhuma tag sobrevive.
fn sanitize_description(text: &str) -> String {
    ammonia::Builder::empty().clean(text).to_string()
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("sector not found: {0}")]
    UnknownSector(String),

    #[error("persistence failed: {0}")]
    Persistence(#[from] anyhow::Error),
}

/// Validate and persist one complaint.
///
/// With the database down the record is acknowledged as "accepted locally"
/// instead of failing the submission; there is no later reconciliation.
pub async fn submit(
    sector_id: &str,
    draft: &ComplaintDraft,
    submitted_by: Option<&str>,
) -> Result<SubmitComplaintResponse, SubmitError> {
    validate(draft)?;

    let sector = catalog::get_sector(sector_id)
        .ok_or_else(|| SubmitError::UnknownSector(sector_id.to_string()))?;

    let sanitized = ComplaintDraft {
        description: sanitize_description(&draft.description),
        ..draft.clone()
    };

    let record = ComplaintRecord::from_draft(
        &sanitized,
        &sector.id,
        &sector.name,
        submitted_by,
        Utc::now(),
    );

    match try_get_connection() {
        Some(conn) => {
            let id = repository::insert(conn, &record).await?;
            tracing::info!("Complaint {} accepted for sector {}", id, sector.id);
            Ok(SubmitComplaintResponse {
                id: Some(id),
                accepted_locally: false,
                message: "Reclamação enviada com sucesso! Obrigado pela sua colaboração.".into(),
            })
        }
        None => {
            tracing::warn!(
                "Complaint for sector {} accepted locally: database unavailable",
                sector.id
            );
            Ok(SubmitComplaintResponse {
                id: None,
                accepted_locally: true,
                message: "Reclamação registrada localmente. Finalizar configuração.".into(),
            })
        }
    }
}

/// Current feed snapshot, newest first. Callers re-render the whole list
/// on every snapshot.
pub async fn list_recent() -> anyhow::Result<Vec<ComplaintRecord>> {
    match try_get_connection() {
        Some(conn) => repository::list_recent(conn).await,
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_markup() {
        assert_eq!(
            sanitize_description("Vazamento <script>alert(1)</script>no bloco A"),
            "Vazamento no bloco A"
        );
        assert_eq!(
            sanitize_description("<b>Água turva</b>"),
            "Água turva"
        );
    }
}
