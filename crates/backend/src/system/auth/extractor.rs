use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// Extractor for getting the current manager from the JWT token
/// Usage in handlers: `async fn handler(CurrentManager(claims): CurrentManager) -> Response`
pub struct CurrentManager(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentManager
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Claims are set by the require_auth middleware
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentManager)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
