use contracts::complaint::{ComplaintRecord, ComplaintStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub sector_id: String,
    pub sector_name: String,
    pub location_type: String,
    pub description: String,
    pub identify_user: bool,
    pub user_name: Option<String>,
    pub user_matricula: Option<String>,
    pub status: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub submitted_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ComplaintRecord {
    fn from(m: Model) -> Self {
        let status = match m.status.as_str() {
            "in_progress" => ComplaintStatus::InProgress,
            "resolved" => ComplaintStatus::Resolved,
            _ => ComplaintStatus::New,
        };
        ComplaintRecord {
            id: Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4()),
            sector_id: m.sector_id,
            sector_name: m.sector_name,
            location_type: m.location_type,
            description: m.description,
            identify_user: m.identify_user,
            user_name: m.user_name,
            user_matricula: m.user_matricula,
            status,
            submitted_at: m.submitted_at,
            submitted_by: m.submitted_by,
        }
    }
}

fn status_code(status: ComplaintStatus) -> &'static str {
    match status {
        ComplaintStatus::New => "new",
        ComplaintStatus::InProgress => "in_progress",
        ComplaintStatus::Resolved => "resolved",
    }
}

pub async fn insert(conn: &DatabaseConnection, record: &ComplaintRecord) -> anyhow::Result<Uuid> {
    let active = ActiveModel {
        id: Set(record.id.to_string()),
        sector_id: Set(record.sector_id.clone()),
        sector_name: Set(record.sector_name.clone()),
        location_type: Set(record.location_type.clone()),
        description: Set(record.description.clone()),
        identify_user: Set(record.identify_user),
        user_name: Set(record.user_name.clone()),
        user_matricula: Set(record.user_matricula.clone()),
        status: Set(status_code(record.status).to_string()),
        submitted_at: Set(record.submitted_at),
        submitted_by: Set(record.submitted_by.clone()),
    };
    active.insert(conn).await?;
    Ok(record.id)
}

/// Feed snapshot: every complaint, newest first.
pub async fn list_recent(conn: &DatabaseConnection) -> anyhow::Result<Vec<ComplaintRecord>> {
    let items = Entity::find()
        .order_by_desc(Column::SubmittedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn model_round_trips_status_codes() {
        let model = Model {
            id: Uuid::new_v4().to_string(),
            sector_id: "ic_ufba".into(),
            sector_name: "IC".into(),
            location_type: "Bebedouro".into(),
            description: "Gosto estranho.".into(),
            identify_user: false,
            user_name: None,
            user_matricula: None,
            status: "in_progress".into(),
            submitted_at: Utc::now(),
            submitted_by: "anonymous_user".into(),
        };
        let record: ComplaintRecord = model.into();
        assert_eq!(record.status, ComplaintStatus::InProgress);
        assert_eq!(status_code(record.status), "in_progress");
    }

    #[test]
    fn unknown_status_defaults_to_new() {
        let model = Model {
            id: "not-a-uuid".into(),
            sector_id: "ic_ufba".into(),
            sector_name: "IC".into(),
            location_type: "Torneira".into(),
            description: "Vazamento.".into(),
            identify_user: false,
            user_name: None,
            user_matricula: None,
            status: "???".into(),
            submitted_at: Utc::now(),
            submitted_by: "anonymous_user".into(),
        };
        let record: ComplaintRecord = model.into();
        assert_eq!(record.status, ComplaintStatus::New);
    }
}
