use crate::error::TripServiceError;
use crate::types::trip::{TripRequest, TripResult};

/// Submits a trip request to the external routing/HOS computation service
/// and returns its computed timeline, distance and polyline. Any non-success
/// response is surfaced as a single user-facing message; no automatic retry.
pub async fn calculate_trip(
    http: &reqwest::Client,
    base_url: &str,
    request: &TripRequest,
) -> Result<TripResult, TripServiceError> {
    let url = format!("{}/api/calculate-trip/", base_url.trim_end_matches('/'));

    let response = http
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| TripServiceError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Trip service returned {}", status));
        return Err(TripServiceError::Rejected(message));
    }

    response
        .json::<TripResult>()
        .await
        .map_err(|e| TripServiceError::InvalidResponse(e.to_string()))
}
