//! Explicit application state for one editing session
//!
//! Holds the selected schema type and its form values, so the renderer and
//! builder are always called with the state they operate on.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::builder::{BuildWarning, BuilderOptions, SchemaBuilder};
use crate::catalog::{FieldCatalog, SchemaTypeConfig};
use crate::error::CatalogError;
use crate::form::{FormRenderer, FormState, FormSurface};
use crate::preview::Preview;

/// What the preview pane shows after an update
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewUpdate {
    pub schema_type: String,
    pub preview: Preview,
    pub warnings: Vec<BuildWarning>,
}

/// Catalog and builder settings a client needs to run sessions locally
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub default_type: String,
    /// Seconds east of UTC
    pub utc_offset_seconds: i32,
    pub types: Vec<SchemaTypeConfig>,
}

impl SessionConfig {
    pub fn new(catalog: &FieldCatalog, options: BuilderOptions) -> Self {
        Self {
            default_type: catalog.default_type().key.clone(),
            utc_offset_seconds: options.utc_offset.local_minus_utc(),
            types: catalog.types().cloned().collect(),
        }
    }

    /// Rebuild the catalog and options. The types are validated again.
    pub fn into_parts(self) -> Result<(FieldCatalog, BuilderOptions), Vec<CatalogError>> {
        let utc_offset = FixedOffset::east_opt(self.utc_offset_seconds).ok_or_else(|| {
            vec![CatalogError::InvalidValue {
                field: "utc_offset_seconds".to_string(),
                reason: format!("{} is not a valid UTC offset", self.utc_offset_seconds),
            }]
        })?;
        let catalog = FieldCatalog::new(self.types, &self.default_type)?;
        Ok((catalog, BuilderOptions { utc_offset }))
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    catalog: Arc<FieldCatalog>,
    options: BuilderOptions,
    schema_type: String,
    form: FormState,
}

impl Session {
    /// Start a session on `key` (unknown keys fall back to the default type).
    pub fn new(catalog: Arc<FieldCatalog>, key: &str) -> Self {
        let config = catalog.resolve(key);
        let schema_type = config.key.clone();
        let form = FormState::seeded(config);
        Self {
            catalog,
            options: BuilderOptions::default(),
            schema_type,
            form,
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn schema_type(&self) -> &str {
        &self.schema_type
    }

    pub fn config(&self) -> &SchemaTypeConfig {
        self.catalog.resolve(&self.schema_type)
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// Switch type. The previous form state is discarded.
    pub fn select(&mut self, key: &str) -> FormSurface {
        let config = self.catalog.resolve(key);
        tracing::debug!(requested = key, resolved = %config.key, "Schema type selected");
        self.schema_type = config.key.clone();
        self.form = FormState::seeded(config);
        self.surface()
    }

    /// Record an input event. Ids outside the active type are ignored.
    pub fn input(&mut self, id: &str, value: &str) -> bool {
        if self.config().field(id).is_none() {
            tracing::debug!(field = id, schema_type = %self.schema_type, "Ignoring input for unknown field");
            return false;
        }
        self.form.set(id, value);
        true
    }

    /// Controls for the active type showing the current values
    pub fn surface(&self) -> FormSurface {
        FormRenderer::render_with(self.config(), &self.form)
    }

    pub fn preview(&self) -> PreviewUpdate {
        let now = SchemaBuilder::new(&self.catalog)
            .with_options(self.options)
            .now();
        self.preview_at(now)
    }

    pub fn preview_at(&self, now: DateTime<FixedOffset>) -> PreviewUpdate {
        let report = SchemaBuilder::new(&self.catalog)
            .with_options(self.options)
            .build_at(&self.schema_type, &self.form, now);
        PreviewUpdate {
            schema_type: self.schema_type.clone(),
            preview: Preview::render(&report.document),
            warnings: report.warnings,
        }
    }
}
