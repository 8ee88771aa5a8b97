use anyhow::{Context, Result};
use chrono::Utc;
use contracts::notify::NotificationPrefs;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

/// Read stored preferences; `None` when the manager never saved any.
pub async fn get(
    conn: &DatabaseConnection,
    manager_id: &str,
) -> Result<Option<NotificationPrefs>> {
    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT sms_enabled, sms_number, email_enabled, email_address, \
             whatsapp_enabled, whatsapp_number, whatsapp_autopopulate \
             FROM manager_preferences WHERE manager_id = ?",
            [manager_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let prefs = NotificationPrefs {
                sms_enabled: row.try_get::<i32>("", "sms_enabled")? != 0,
                sms_number: row.try_get("", "sms_number")?,
                email_enabled: row.try_get::<i32>("", "email_enabled")? != 0,
                email_address: row.try_get("", "email_address")?,
                whatsapp_enabled: row.try_get::<i32>("", "whatsapp_enabled")? != 0,
                whatsapp_number: row.try_get("", "whatsapp_number")?,
                whatsapp_autopopulate: row.try_get::<i32>("", "whatsapp_autopopulate")? != 0,
            };
            Ok(Some(prefs))
        }
        None => Ok(None),
    }
}

/// Upsert with merge semantics: the whole document is replaced and
/// `last_updated` is stamped server-side.
pub async fn save(
    conn: &DatabaseConnection,
    manager_id: &str,
    prefs: &NotificationPrefs,
) -> Result<()> {
    let last_updated = Utc::now().to_rfc3339();
    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO manager_preferences \
         (manager_id, sms_enabled, sms_number, email_enabled, email_address, \
          whatsapp_enabled, whatsapp_number, whatsapp_autopopulate, last_updated) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT(manager_id) DO UPDATE SET \
          sms_enabled = excluded.sms_enabled, \
          sms_number = excluded.sms_number, \
          email_enabled = excluded.email_enabled, \
          email_address = excluded.email_address, \
          whatsapp_enabled = excluded.whatsapp_enabled, \
          whatsapp_number = excluded.whatsapp_number, \
          whatsapp_autopopulate = excluded.whatsapp_autopopulate, \
          last_updated = excluded.last_updated",
        [
            manager_id.into(),
            (if prefs.sms_enabled { 1 } else { 0 }).into(),
            prefs.sms_number.clone().into(),
            (if prefs.email_enabled { 1 } else { 0 }).into(),
            prefs.email_address.clone().into(),
            (if prefs.whatsapp_enabled { 1 } else { 0 }).into(),
            prefs.whatsapp_number.clone().into(),
            (if prefs.whatsapp_autopopulate { 1 } else { 0 }).into(),
            last_updated.into(),
        ],
    ))
    .await
    .context("Failed to save notification preferences")?;

    Ok(())
}
