use contracts::catalog::Catalog;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the full location registry once at startup.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    let response = Request::get(&format!("{}/api/catalog", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch catalog: {}", response.status()));
    }

    response
        .json::<Catalog>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
