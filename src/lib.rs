//! # ldforge
//!
//! Generates schema.org JSON-LD for web pages from small, per-type forms.
//!
//! The document model lives in [`ldforge_core`]; this crate adds:
//!
//! - **Config**: layered settings (file, `LDFORGE_*` env, CLI flags) and
//!   extra schema types loaded from a directory, with live reload
//! - **CLI**: list types and fields, build documents from the terminal
//! - **HTTP API**: catalog, form surfaces, previews and downloads
//! - **UI**: the embedded browser generator
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ldforge::adapters::api_handler::ApiState;
//! use ldforge::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     let catalog = settings
//!         .field_catalog()
//!         .map_err(|errors| anyhow::anyhow!("{} catalog errors", errors.len()))?;
//!     let offset = settings.builder.offset().map_err(anyhow::Error::msg)?;
//!
//!     let state = ApiState::new(catalog, ldforge_core::BuilderOptions { utc_offset: offset });
//!     let _app = ldforge::create_app(state);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
pub fn create_app(state: ApiState) -> Router {
    let health_handler = Arc::new(HealthHandler::new(state.catalog.clone()));

    let health_router = Router::new()
        .route(
            "/health",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.health().await }
                }
            }),
        )
        .route(
            "/health/live",
            get({
                let handler = health_handler.clone();
                move || {
                    let h = handler.clone();
                    async move { h.live().await }
                }
            }),
        );

    let api_router = Router::new()
        .route("/catalog", get(api_handler::get_catalog))
        .route("/schema-types", get(api_handler::list_schema_types))
        .route("/schema-types/:key/form", get(api_handler::get_form))
        .route("/preview", post(api_handler::preview))
        .route("/download", post(api_handler::download))
        .route("/guide", get(api_handler::get_guide))
        .route("/validator", get(api_handler::get_validator))
        .with_state(state);

    health_router
        .nest("/api", api_router)
        .fallback(crate::adapters::ui_handler::UIHandler::serve)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
