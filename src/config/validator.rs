use std::collections::HashMap;
use thiserror::Error;

use ldforge_core::{CatalogError, SchemaTypeConfig};

use crate::config::{ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Schema catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(reason) = settings.builder.offset() {
            errors.push(ValidationError::InvalidValue {
                field: "builder.utc_offset".to_string(),
                reason,
            });
        }

        if let Err(e) = Self::validate_schema_types(&settings.schema_types) {
            errors.extend(e);
        }

        // Merged catalog must hold together, default type included
        if let Err(e) = settings.field_catalog() {
            errors.extend(e.into_iter().map(ValidationError::from));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks across loaded files; per-type checks happen in the catalog.
    fn validate_schema_types(types: &[SchemaTypeConfig]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_keys = HashMap::new();

        for (idx, schema_type) in types.iter().enumerate() {
            if let Some(prev_idx) = seen_keys.insert(&schema_type.key, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Schema type '{}' is defined by files {} and {}",
                    schema_type.key, prev_idx, idx
                )));
            }

            if schema_type.label.trim().is_empty() {
                errors.push(ValidationError::MissingField(format!(
                    "schema_types[{}].label",
                    idx
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuilderSettings, CatalogSettings};
    use ldforge_core::{FieldDescriptor, FieldKind};
    use serde_json::json;
    use std::path::PathBuf;

    fn settings() -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            builder: BuilderSettings::default(),
            catalog: CatalogSettings::default(),
            schema_types: vec![],
            root: PathBuf::from("."),
        }
    }

    fn recipe() -> SchemaTypeConfig {
        SchemaTypeConfig {
            key: "recipe".to_string(),
            label: "Recipe".to_string(),
            template: json!({
                "@context": "https://schema.org",
                "@type": "Recipe",
                "name": "Recipe Name"
            }),
            fields: vec![FieldDescriptor::new("recipeName", "Recipe Name", FieldKind::Text, "name")],
        }
    }

    #[test]
    fn test_valid_settings() {
        let mut settings = settings();
        settings.schema_types.push(recipe());
        assert!(ConfigValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_invalid_server() {
        let mut settings = settings();
        settings.server.host = String::new();
        settings.server.port = 0;

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_invalid_offset() {
        let mut settings = settings();
        settings.builder.utc_offset = "somewhere".to_string();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidValue { field, .. } if field == "builder.utc_offset"
        ));
    }

    #[test]
    fn test_duplicate_schema_type_files() {
        let mut settings = settings();
        settings.schema_types = vec![recipe(), recipe()];

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::Duplicate(msg) if msg.contains("recipe"))));
    }

    #[test]
    fn test_unknown_default_type() {
        let mut settings = settings();
        settings.catalog.default_type = "recipe".to_string();

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::Catalog(CatalogError::UnknownDefault(key)) if key == "recipe"
        )));

        settings.schema_types.push(recipe());
        assert!(ConfigValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_broken_template_is_reported() {
        let mut settings = settings();
        let mut broken = recipe();
        broken.template = json!({ "name": "No context" });
        settings.schema_types.push(broken);

        assert!(ConfigValidator::validate(&settings).is_err());
    }
}
