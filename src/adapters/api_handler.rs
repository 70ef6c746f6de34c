//! REST API handlers for the generator
//!
//! Exposes the catalog, form surfaces and document previews so other tools
//! can drive the builder without the browser UI.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use ldforge_core::actions::{implementation_guide, DOWNLOAD_MIME};
use ldforge_core::{
    BuildWarning, BuilderOptions, Download, FieldCatalog, FormRenderer, FormState, Preview,
    SchemaBuilder, SessionConfig, VALIDATOR_URL,
};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<RwLock<FieldCatalog>>,
    pub options: BuilderOptions,
}

impl ApiState {
    pub fn new(catalog: FieldCatalog, options: BuilderOptions) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            options,
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SchemaTypeSummary {
    pub key: String,
    pub label: String,
    /// schema.org `@type`
    pub schema_type: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PreviewRequest {
    pub schema_type: String,
    #[serde(default)]
    pub values: FormState,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PreviewResponse {
    /// Resolved key; the default type when the requested one is unknown
    pub schema_type: String,
    pub text: String,
    pub html: String,
    pub warnings: Vec<BuildWarning>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidatorInfo {
    pub url: String,
}

impl ApiState {
    async fn preview(&self, request: &PreviewRequest) -> PreviewResponse {
        let catalog = self.catalog.read().await;
        let config = catalog.resolve(&request.schema_type);
        let builder = SchemaBuilder::new(&catalog).with_options(self.options);
        let report = builder.build_at(&config.key, &request.values, builder.now());
        let preview = Preview::render(&report.document);

        PreviewResponse {
            schema_type: config.key.clone(),
            text: preview.text,
            html: preview.html,
            warnings: report.warnings,
        }
    }
}

// ============================================================================
// Catalog Endpoints
// ============================================================================

/// GET /api/schema-types - List schema types in selector order
pub async fn list_schema_types(State(state): State<ApiState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    let types: Vec<SchemaTypeSummary> = catalog
        .types()
        .map(|t| SchemaTypeSummary {
            key: t.key.clone(),
            label: t.label.clone(),
            schema_type: t.schema_type().to_string(),
        })
        .collect();
    (StatusCode::OK, Json(ApiResponse::success(types)))
}

/// GET /api/catalog - Every type and the builder settings, for the browser UI
pub async fn get_catalog(State(state): State<ApiState>) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    (
        StatusCode::OK,
        Json(ApiResponse::success(SessionConfig::new(&catalog, state.options))),
    )
}

/// GET /api/schema-types/:key/form - Controls for a type, seeded with defaults
pub async fn get_form(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let catalog = state.catalog.read().await;
    let surface = FormRenderer::render(&catalog, &key);
    if surface.schema_type != key {
        tracing::debug!(requested = %key, resolved = %surface.schema_type, "Unknown schema type, using default");
    }
    (StatusCode::OK, Json(ApiResponse::success(surface)))
}

// ============================================================================
// Preview Endpoints
// ============================================================================

/// Unreadable request bodies keep their status but use the error envelope
fn rejection_response(rejection: JsonRejection) -> Response {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ApiResponse::<()>::error(rejection.body_text())),
    )
        .into_response()
}

/// POST /api/preview - Build a document and render its preview
pub async fn preview(
    State(state): State<ApiState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    let response = state.preview(&request).await;
    for warning in &response.warnings {
        tracing::info!(field = %warning.field, "{}", warning.message);
    }
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

/// POST /api/download - The preview text as a schema.json attachment
pub async fn download(
    State(state): State<ApiState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };
    let response = state.preview(&request).await;
    let download = Download::from_preview(&Preview {
        text: response.text,
        html: response.html,
    });
    let disposition = format!("attachment; filename=\"{}\"", download.file_name);

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOWNLOAD_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.contents,
    )
        .into_response()
}

// ============================================================================
// Static Endpoints
// ============================================================================

/// GET /api/guide - Implementation guide sections
pub async fn get_guide() -> impl IntoResponse {
    (StatusCode::OK, Json(ApiResponse::success(implementation_guide())))
}

/// GET /api/validator - External rich results test URL
pub async fn get_validator() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::success(ValidatorInfo {
            url: VALIDATOR_URL.to_string(),
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ApiState {
        ApiState::new(FieldCatalog::builtin(), BuilderOptions::default())
    }

    #[tokio::test]
    async fn test_preview_uses_values() {
        let request = PreviewRequest {
            schema_type: "product".to_string(),
            values: FormState::new().with("name", "Widget"),
        };
        let response = state().preview(&request).await;

        assert_eq!(response.schema_type, "product");
        assert!(response.text.contains("\"name\": \"Widget\""));
        assert!(response.html.contains("<span class=\"json-key\">"));
        assert!(response.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_preview_falls_back_for_unknown_type() {
        let request = PreviewRequest {
            schema_type: "recipe".to_string(),
            values: FormState::new(),
        };
        let response = state().preview(&request).await;

        assert_eq!(response.schema_type, "organization");
        assert!(response.text.contains("\"@type\": \"Organization\""));
    }

    #[tokio::test]
    async fn test_preview_reports_malformed_input() {
        let request = PreviewRequest {
            schema_type: "profilePage".to_string(),
            values: FormState::new().with("followCount", "lots"),
        };
        let response = state().preview(&request).await;

        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.warnings[0].field, "followCount");
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let body = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(body, serde_json::json!({ "success": false, "error": "nope" }));
    }
}
