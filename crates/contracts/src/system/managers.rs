use serde::{Deserialize, Serialize};

/// Conta de gestor armazenada pelo backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateManagerDto {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub is_admin: bool,
}
