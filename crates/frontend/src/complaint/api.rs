use contracts::complaint::{ComplaintDraft, SubmitComplaintRequest, SubmitComplaintResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Submit one complaint. A 422 response still parses: the caller only
/// reaches it with a locally-valid draft, so any remaining issues surface
/// as a plain error string.
pub async fn submit_complaint(
    sector_id: String,
    draft: ComplaintDraft,
) -> Result<SubmitComplaintResponse, String> {
    let body = SubmitComplaintRequest { sector_id, draft };

    let response = Request::post(&format!("{}/api/complaint", api_base()))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to submit complaint: {}", response.status()));
    }

    response
        .json::<SubmitComplaintResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
