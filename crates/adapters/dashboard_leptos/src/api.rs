//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use bayanchor_domain::presenter::ShipmentDetailsView;
use bayanchor_domain::stat::Stat;
use gloo_net::http::{Request, Response};
use serde::Deserialize;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Percent-encode a path segment typed by the user.
fn encode_path_segment(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace(' ', "%20")
}

/// Fetch the homepage statistics.
pub async fn fetch_stats() -> Result<Vec<Stat>, ApiError> {
    let resp = check_response(Request::get("/api/stats").send().await?).await?;
    let stats: Vec<Stat> = resp.json().await?;
    Ok(stats)
}

/// Fetch the formatted details of one shipment.
pub async fn fetch_shipment_details(number: &str) -> Result<ShipmentDetailsView, ApiError> {
    let url = format!(
        "/api/shipments/{}/details",
        encode_path_segment(number.trim())
    );
    let resp = check_response(Request::get(&url).send().await?).await?;
    let view: ShipmentDetailsView = resp.json().await?;
    Ok(view)
}
