use axum::{http::StatusCode, response::IntoResponse, Json};
use ldforge_core::FieldCatalog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub catalog: String,
    pub schema_types: usize,
}

pub struct HealthHandler {
    catalog: Arc<RwLock<FieldCatalog>>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(catalog: Arc<RwLock<FieldCatalog>>) -> Self {
        Self {
            catalog,
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check with catalog status
    pub async fn health(&self) -> impl IntoResponse {
        let catalog = self.catalog.read().await;
        let catalog_ok = catalog.validate().is_ok();

        let status = HealthStatus {
            status: if catalog_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                catalog: if catalog_ok { "ok" } else { "invalid" }.to_string(),
                schema_types: catalog.len(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Liveness check - returns 200 if the server is responsive
    pub async fn live(&self) -> impl IntoResponse {
        (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "alive",
                "message": "Server is alive"
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    fn handler() -> HealthHandler {
        HealthHandler::new(Arc::new(RwLock::new(FieldCatalog::builtin())))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handler().health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let status: HealthStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.checks.schema_types, 9);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let response = handler().live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
