use axum::http::StatusCode;
use axum::Json;
use contracts::notify::NotificationPrefs;

use crate::domain::notification::service;
use crate::shared::data::db::try_get_connection;
use crate::system::auth::extractor::CurrentManager;

/// GET /api/manager/preferences (protected)
pub async fn get_preferences(
    CurrentManager(claims): CurrentManager,
) -> Result<Json<NotificationPrefs>, StatusCode> {
    if try_get_connection().is_none() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    match service::get(&claims.sub).await {
        Ok(prefs) => Ok(Json(prefs)),
        Err(e) => {
            tracing::error!("Failed to load notification preferences: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/manager/preferences (protected)
pub async fn save_preferences(
    CurrentManager(claims): CurrentManager,
    Json(prefs): Json<NotificationPrefs>,
) -> Result<StatusCode, StatusCode> {
    if try_get_connection().is_none() {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    match service::save(&claims.sub, &prefs).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::error!("Failed to save notification preferences: {e}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
