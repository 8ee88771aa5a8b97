use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Campo do formulário de reclamação apontado por uma falha de validação.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintField {
    LocationType,
    Description,
    UserIdentification,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: ComplaintField,
    pub message: String,
}

/// All per-field failures of one submission, reported together so the
/// caller can show every violation at once.
#[derive(Debug, Clone, Error)]
#[error("complaint validation failed with {} issue(s)", .0.len())]
pub struct ValidationError(pub Vec<ValidationIssue>);

/// Dados brutos do formulário, antes da validação.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplaintDraft {
    pub location_type: String,
    pub description: String,
    pub identify_user: bool,
    pub user_name: String,
    pub user_matricula: String,
}

/// Run every validation rule; never short-circuits.
pub fn validate(draft: &ComplaintDraft) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if draft.location_type.is_empty() {
        issues.push(ValidationIssue {
            field: ComplaintField::LocationType,
            message: "Selecione um local.".into(),
        });
    }
    if draft.description.trim().is_empty() {
        issues.push(ValidationIssue {
            field: ComplaintField::Description,
            message: "Preencha uma descrição com detalhes do problema.".into(),
        });
    }
    if draft.identify_user
        && draft.user_name.trim().is_empty()
        && draft.user_matricula.trim().is_empty()
    {
        issues.push(ValidationIssue {
            field: ComplaintField::UserIdentification,
            message: "Preencha seu nome ou Matrícula/ID.".into(),
        });
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(issues))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    New,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    /// Display form: uppercase with the underscore spelled as a space.
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::New => "NEW",
            ComplaintStatus::InProgress => "IN PROGRESS",
            ComplaintStatus::Resolved => "RESOLVED",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ComplaintStatus::New => "complaint-new",
            ComplaintStatus::InProgress => "complaint-in-progress",
            ComplaintStatus::Resolved => "complaint-resolved",
        }
    }
}

/// Registro imutável de uma reclamação aceita.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub id: Uuid,
    pub sector_id: String,
    pub sector_name: String,
    pub location_type: String,
    pub description: String,
    pub identify_user: bool,
    pub user_name: Option<String>,
    pub user_matricula: Option<String>,
    pub status: ComplaintStatus,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: String,
}

impl ComplaintRecord {
    /// Build the immutable record from a validated draft. Identification
    /// fields are dropped entirely when the user chose anonymity.
    pub fn from_draft(
        draft: &ComplaintDraft,
        sector_id: &str,
        sector_name: &str,
        submitted_by: Option<&str>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let keep = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Self {
            id: Uuid::new_v4(),
            sector_id: sector_id.to_string(),
            sector_name: sector_name.to_string(),
            location_type: draft.location_type.clone(),
            description: draft.description.trim().to_string(),
            identify_user: draft.identify_user,
            user_name: draft.identify_user.then(|| keep(&draft.user_name)).flatten(),
            user_matricula: draft
                .identify_user
                .then(|| keep(&draft.user_matricula))
                .flatten(),
            status: ComplaintStatus::New,
            submitted_at,
            submitted_by: submitted_by.unwrap_or("anonymous_user").to_string(),
        }
    }

    /// "Anônimo", or name and matrícula with absent parts elided.
    pub fn identity_label(&self) -> String {
        if !self.identify_user {
            return "Anônimo".into();
        }
        let name = self.user_name.as_deref().unwrap_or("");
        let matricula = self
            .user_matricula
            .as_deref()
            .map(|m| format!("({m})"))
            .unwrap_or_default();
        format!("{name} {matricula}").trim().to_string()
    }
}

/// Corpo da requisição de envio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitComplaintRequest {
    pub sector_id: String,
    #[serde(flatten)]
    pub draft: ComplaintDraft,
}

/// Resultado do envio. `accepted_locally` marks the degraded mode where the
/// persistence collaborator was unavailable and the record was not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitComplaintResponse {
    pub id: Option<Uuid>,
    pub accepted_locally: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ComplaintDraft {
        ComplaintDraft {
            location_type: "Bebedouro".into(),
            description: "Água com gosto estranho no corredor principal.".into(),
            identify_user: false,
            user_name: String::new(),
            user_matricula: String::new(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(validate(&valid_draft()).is_ok());
    }

    #[test]
    fn all_violations_reported_in_one_call() {
        let draft = ComplaintDraft {
            location_type: String::new(),
            description: String::new(),
            identify_user: true,
            user_name: String::new(),
            user_matricula: String::new(),
        };
        let err = validate(&draft).unwrap_err();
        let fields: Vec<ComplaintField> = err.0.iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            [
                ComplaintField::LocationType,
                ComplaintField::Description,
                ComplaintField::UserIdentification,
            ]
        );
    }

    #[test]
    fn whitespace_only_description_fails() {
        let draft = ComplaintDraft {
            description: "  ".into(),
            ..valid_draft()
        };
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.0.len(), 1);
        assert_eq!(err.0[0].field, ComplaintField::Description);
    }

    #[test]
    fn identification_needs_name_or_matricula() {
        let draft = ComplaintDraft {
            identify_user: true,
            user_matricula: "202512345".into(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_ok());

        let draft = ComplaintDraft {
            identify_user: true,
            user_name: "  ".into(),
            user_matricula: " ".into(),
            ..valid_draft()
        };
        assert!(validate(&draft).is_err());
    }

    #[test]
    fn record_drops_identity_for_anonymous() {
        let draft = ComplaintDraft {
            user_name: "Maria".into(),
            user_matricula: "123".into(),
            ..valid_draft()
        };
        let record =
            ComplaintRecord::from_draft(&draft, "ic_ufba", "IC", None, Utc::now());
        assert!(record.user_name.is_none());
        assert!(record.user_matricula.is_none());
        assert_eq!(record.submitted_by, "anonymous_user");
        assert_eq!(record.status, ComplaintStatus::New);
        assert_eq!(record.identity_label(), "Anônimo");
    }

    #[test]
    fn record_trims_description_and_identity() {
        let draft = ComplaintDraft {
            description: "  Vazamento constante.  ".into(),
            identify_user: true,
            user_name: " João ".into(),
            user_matricula: String::new(),
            ..valid_draft()
        };
        let record =
            ComplaintRecord::from_draft(&draft, "ic_ufba", "IC", Some("uid-1"), Utc::now());
        assert_eq!(record.description, "Vazamento constante.");
        assert_eq!(record.user_name.as_deref(), Some("João"));
        assert!(record.user_matricula.is_none());
        assert_eq!(record.submitted_by, "uid-1");
        assert_eq!(record.identity_label(), "João");
    }

    #[test]
    fn identity_label_combines_name_and_matricula() {
        let draft = ComplaintDraft {
            identify_user: true,
            user_name: "Ana Souza".into(),
            user_matricula: "2023001".into(),
            ..valid_draft()
        };
        let record =
            ComplaintRecord::from_draft(&draft, "ic_ufba", "IC", Some("uid-2"), Utc::now());
        assert_eq!(record.identity_label(), "Ana Souza (2023001)");
    }

    #[test]
    fn status_labels() {
        assert_eq!(ComplaintStatus::InProgress.label(), "IN PROGRESS");
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }
}
