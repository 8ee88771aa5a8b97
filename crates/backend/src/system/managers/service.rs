use anyhow::Result;
use chrono::Utc;
use contracts::system::managers::{CreateManagerDto, Manager};

use super::repository;
use crate::system::auth::password;

/// Create a new manager account
pub async fn create(dto: CreateManagerDto) -> Result<String> {
    if dto.email.trim().is_empty() {
        return Err(anyhow::anyhow!("Email cannot be empty"));
    }
    if !dto.email.contains('@') {
        return Err(anyhow::anyhow!("Invalid email format"));
    }
    if repository::get_by_email(&dto.email).await?.is_some() {
        return Err(anyhow::anyhow!("Email already registered"));
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let manager_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let manager = Manager {
        id: manager_id.clone(),
        email: dto.email,
        full_name: dto.full_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&manager, &password_hash).await?;

    Ok(manager_id)
}

/// Check email/password against the stored hash. Returns the account only
/// when the credentials match and the account is active.
pub async fn verify_credentials(email: &str, password: &str) -> Result<Option<Manager>> {
    let Some(manager) = repository::get_by_email(email).await? else {
        return Ok(None);
    };
    if !manager.is_active {
        return Ok(None);
    }

    let Some(hash) = repository::get_password_hash(email).await? else {
        return Ok(None);
    };
    if !password::verify_password(password, &hash)? {
        return Ok(None);
    }

    repository::update_last_login(&manager.id, &Utc::now().to_rfc3339()).await?;

    Ok(Some(manager))
}

pub async fn get_by_id(id: &str) -> Result<Option<Manager>> {
    repository::get_by_id(id).await
}
