use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::shared::config::{resolve_path, Config};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(config: &Config) -> anyhow::Result<()> {
    let db_file = resolve_path(&config.database.path);
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = db_file.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // Minimal schema bootstrap: complaint intake and manager preferences
    let check_complaints = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='complaints';
    "#;
    let complaints_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_complaints.to_string(),
        ))
        .await?;

    if complaints_exists.is_empty() {
        tracing::info!("Creating complaints table");
        let create_complaints_sql = r#"
            CREATE TABLE complaints (
                id TEXT PRIMARY KEY NOT NULL,
                sector_id TEXT NOT NULL,
                sector_name TEXT NOT NULL,
                location_type TEXT NOT NULL,
                description TEXT NOT NULL,
                identify_user INTEGER NOT NULL DEFAULT 0,
                user_name TEXT,
                user_matricula TEXT,
                status TEXT NOT NULL DEFAULT 'new',
                submitted_at TEXT NOT NULL,
                submitted_by TEXT NOT NULL
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_complaints_sql.to_string(),
        ))
        .await?;
    }

    let check_preferences = r#"
        SELECT name FROM sqlite_master WHERE type='table' AND name='manager_preferences';
    "#;
    let preferences_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_preferences.to_string(),
        ))
        .await?;

    if preferences_exists.is_empty() {
        tracing::info!("Creating manager_preferences table");
        let create_preferences_sql = r#"
            CREATE TABLE manager_preferences (
                manager_id TEXT PRIMARY KEY NOT NULL,
                sms_enabled INTEGER NOT NULL DEFAULT 0,
                sms_number TEXT NOT NULL DEFAULT '',
                email_enabled INTEGER NOT NULL DEFAULT 0,
                email_address TEXT NOT NULL DEFAULT '',
                whatsapp_enabled INTEGER NOT NULL DEFAULT 0,
                whatsapp_number TEXT NOT NULL DEFAULT '',
                whatsapp_autopopulate INTEGER NOT NULL DEFAULT 0,
                last_updated TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_preferences_sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// The persistence collaborator, or `None` while the database is down.
/// Callers that can degrade (complaint intake) use this form.
pub fn try_get_connection() -> Option<&'static DatabaseConnection> {
    DB_CONN.get()
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
