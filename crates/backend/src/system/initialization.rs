use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Create the auth system tables when missing.
pub async fn apply_auth_migration() -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS sys_managers (
            id TEXT PRIMARY KEY NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            full_name TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_admin INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            last_login_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_refresh_tokens (
            id TEXT PRIMARY KEY NOT NULL,
            manager_id TEXT NOT NULL,
            token_hash TEXT NOT NULL,
            expires_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            revoked_at TEXT
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );
        "#,
    ];

    for statement in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            statement.to_string(),
        ))
        .await?;
    }

    tracing::info!("Auth system migration applied successfully");

    Ok(())
}

/// Ensure an admin manager exists (create if table is empty)
pub async fn ensure_admin_manager_exists() -> Result<()> {
    use crate::system::managers::{repository, service};
    use contracts::system::managers::CreateManagerDto;

    let count = repository::count_managers().await?;

    if count == 0 {
        tracing::info!("No managers found. Creating default admin manager...");

        let admin_dto = CreateManagerDto {
            email: "admin@aquacampus.local".to_string(),
            password: "admin".to_string(),
            full_name: Some("Gestor Padrão".to_string()),
            is_admin: true,
        };

        let id = service::create(admin_dto).await?;
        tracing::info!("Default admin manager created with id {id}");
        tracing::warn!("Default credentials are admin@aquacampus.local / admin, change them");
    }

    Ok(())
}
