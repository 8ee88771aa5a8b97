use anyhow::Result;
use contracts::notify::NotificationPrefs;

use super::repository;
use crate::shared::data::db::get_connection;

/// Preferences for one manager; a missing document reads as the
/// all-disabled default.
pub async fn get(manager_id: &str) -> Result<NotificationPrefs> {
    let prefs = repository::get(get_connection(), manager_id).await?;
    Ok(prefs.unwrap_or_default())
}

pub async fn save(manager_id: &str, prefs: &NotificationPrefs) -> Result<()> {
    repository::save(get_connection(), manager_id, prefs).await?;
    tracing::info!("Notification preferences saved for manager {manager_id}");
    Ok(())
}
