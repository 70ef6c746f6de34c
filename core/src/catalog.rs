//! Field catalog: schema types, their form fields and default documents

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::field::FieldDescriptor;

/// Key of the schema type used when an unknown key is requested
pub const DEFAULT_SCHEMA_TYPE: &str = "organization";

/// Largest "now" offset a date field may declare, about a century
pub const MAX_NOW_OFFSET_DAYS: i64 = 36_500;

/// Everything needed to render a form and build a document for one type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchemaTypeConfig {
    /// Lookup key, e.g. "localBusiness"
    pub key: String,
    /// Human readable name for the type selector
    pub label: String,
    /// The all-defaults document. Its key order is the output key order.
    pub template: Value,
    /// Form fields in on-screen order
    pub fields: Vec<FieldDescriptor>,
}

impl SchemaTypeConfig {
    /// The schema.org `@type` declared by the template
    pub fn schema_type(&self) -> &str {
        self.template
            .get("@type")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}

/// Ordered set of schema types with a fallback
#[derive(Clone, Debug, PartialEq)]
pub struct FieldCatalog {
    types: Vec<SchemaTypeConfig>,
    default_index: usize,
}

impl FieldCatalog {
    /// Build a catalog, rejecting it if any invariant is broken.
    pub fn new(
        types: Vec<SchemaTypeConfig>,
        default_key: &str,
    ) -> Result<Self, Vec<CatalogError>> {
        let mut errors = validate_types(&types);
        let default_index = types.iter().position(|t| t.key == default_key);
        if default_index.is_none() {
            errors.push(CatalogError::UnknownDefault(default_key.to_string()));
        }

        match default_index {
            Some(default_index) if errors.is_empty() => Ok(Self {
                types,
                default_index,
            }),
            _ => Err(errors),
        }
    }

    /// The types shipped with the tool.
    pub fn builtin() -> Self {
        let types = crate::builtin::schema_types();
        let default_index = types
            .iter()
            .position(|t| t.key == DEFAULT_SCHEMA_TYPE)
            .unwrap_or(0);
        Self {
            types,
            default_index,
        }
    }

    pub fn get(&self, key: &str) -> Option<&SchemaTypeConfig> {
        self.types.iter().find(|t| t.key == key)
    }

    /// Look up a type, falling back to the default for unknown keys.
    pub fn resolve(&self, key: &str) -> &SchemaTypeConfig {
        self.get(key).unwrap_or(&self.types[self.default_index])
    }

    pub fn fields_for(&self, key: &str) -> &[FieldDescriptor] {
        &self.resolve(key).fields
    }

    pub fn default_type(&self) -> &SchemaTypeConfig {
        &self.types[self.default_index]
    }

    /// Switch the fallback type. Unknown keys leave the catalog untouched.
    pub fn set_default(&mut self, key: &str) -> Result<(), CatalogError> {
        let index = self
            .types
            .iter()
            .position(|t| t.key == key)
            .ok_or_else(|| CatalogError::UnknownDefault(key.to_string()))?;
        self.default_index = index;
        Ok(())
    }

    pub fn types(&self) -> impl Iterator<Item = &SchemaTypeConfig> {
        self.types.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|t| t.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Add or replace types by key. A replaced type keeps its position.
    ///
    /// On failure the catalog is left as it was.
    pub fn extend(&mut self, other: Vec<SchemaTypeConfig>) -> Result<(), Vec<CatalogError>> {
        let default_key = self.default_type().key.clone();
        let mut merged = self.types.clone();

        let mut key_to_index: HashMap<String, usize> = merged
            .iter()
            .enumerate()
            .map(|(i, t)| (t.key.clone(), i))
            .collect();

        for item in other {
            if let Some(&idx) = key_to_index.get(&item.key) {
                merged[idx] = item;
            } else {
                key_to_index.insert(item.key.clone(), merged.len());
                merged.push(item);
            }
        }

        *self = Self::new(merged, &default_key)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let errors = validate_types(&self.types);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_types(types: &[SchemaTypeConfig]) -> Vec<CatalogError> {
    let mut errors = Vec::new();
    let mut seen_keys = HashMap::new();

    for (idx, config) in types.iter().enumerate() {
        if config.key.is_empty() {
            errors.push(CatalogError::MissingField(format!("types[{}].key", idx)));
        }

        if let Some(prev_idx) = seen_keys.insert(config.key.as_str(), idx) {
            errors.push(CatalogError::Duplicate(format!(
                "Schema type '{}' appears at indices {} and {}",
                config.key, prev_idx, idx
            )));
        }

        match config.template.as_object() {
            Some(template) => {
                for marker in ["@context", "@type"] {
                    if !template.contains_key(marker) {
                        errors.push(CatalogError::MissingField(format!(
                            "{}.template.{}",
                            config.key, marker
                        )));
                    }
                }
            }
            None => errors.push(CatalogError::InvalidValue {
                field: format!("{}.template", config.key),
                reason: "Template must be a JSON object".to_string(),
            }),
        }

        if config.fields.is_empty() {
            errors.push(CatalogError::MissingField(format!("{}.fields", config.key)));
        }

        let mut seen_ids = HashMap::new();
        for (field_idx, field) in config.fields.iter().enumerate() {
            if field.id.is_empty() {
                errors.push(CatalogError::MissingField(format!(
                    "{}.fields[{}].id",
                    config.key, field_idx
                )));
            }

            if let Some(prev_idx) = seen_ids.insert(field.id.as_str(), field_idx) {
                errors.push(CatalogError::Duplicate(format!(
                    "Field id '{}' in '{}' appears at indices {} and {}",
                    field.id, config.key, prev_idx, field_idx
                )));
            }

            if field.target.is_root() {
                errors.push(CatalogError::InvalidValue {
                    field: format!("{}.fields[{}].target", config.key, field_idx),
                    reason: "Target path must not be empty".to_string(),
                });
            }

            if let Some(days) = field.now_offset_days {
                if !(-MAX_NOW_OFFSET_DAYS..=MAX_NOW_OFFSET_DAYS).contains(&days) {
                    errors.push(CatalogError::InvalidValue {
                        field: format!("{}.fields[{}].now_offset_days", config.key, field_idx),
                        reason: format!("Must be within {} days of now", MAX_NOW_OFFSET_DAYS),
                    });
                }
            }
        }
    }

    errors
}
