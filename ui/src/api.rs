//! Client for the ldforge server API

use gloo_net::http::Request;
use ldforge_core::SessionConfig;
use serde::Deserialize;

const API_BASE: &str = "/api";

/// Generic API response wrapper
#[derive(Debug, Clone, Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

/// Fetch the configured catalog and builder settings
pub async fn get_session_config() -> Result<SessionConfig, String> {
    let url = format!("{}/catalog", API_BASE);
    fetch_json::<SessionConfig>(&url).await
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
