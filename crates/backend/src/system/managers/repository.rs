use anyhow::{Context, Result};
use contracts::system::managers::Manager;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

use crate::shared::data::db::get_connection;

fn manager_from_row(row: &QueryResult) -> Result<Manager> {
    Ok(Manager {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        full_name: row.try_get("", "full_name")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

/// Create manager with password hash
pub async fn create_with_password(manager: &Manager, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_managers (id, email, password_hash, full_name, is_active, is_admin, created_at, updated_at, last_login_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            manager.id.clone().into(),
            manager.email.clone().into(),
            password_hash.to_string().into(),
            manager.full_name.clone().into(),
            (if manager.is_active { 1 } else { 0 }).into(),
            (if manager.is_admin { 1 } else { 0 }).into(),
            manager.created_at.clone().into(),
            manager.updated_at.clone().into(),
            manager.last_login_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert manager")?;

    Ok(())
}

/// Get manager by ID
pub async fn get_by_id(id: &str) -> Result<Option<Manager>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, email, full_name, is_active, is_admin, created_at, updated_at, last_login_at \
             FROM sys_managers WHERE id = ?",
            [id.into()],
        ))
        .await?;

    result.as_ref().map(manager_from_row).transpose()
}

/// Get manager by email
pub async fn get_by_email(email: &str) -> Result<Option<Manager>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, email, full_name, is_active, is_admin, created_at, updated_at, last_login_at \
             FROM sys_managers WHERE email = ?",
            [email.into()],
        ))
        .await?;

    result.as_ref().map(manager_from_row).transpose()
}

/// Password hash for credential verification
pub async fn get_password_hash(email: &str) -> Result<Option<String>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_managers WHERE email = ?",
            [email.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn count_managers() -> Result<i64> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as cnt FROM sys_managers".to_string(),
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get::<i64>("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn update_last_login(id: &str, timestamp: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_managers SET last_login_at = ? WHERE id = ?",
        [timestamp.into(), id.into()],
    ))
    .await?;

    Ok(())
}
