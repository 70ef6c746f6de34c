//! Form state and the data-driven form surface

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::{FieldCatalog, SchemaTypeConfig};
use crate::field::FieldKind;

/// Current raw values of the form, keyed by field id
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for a freshly rendered form: every field holding its default.
    pub fn seeded(config: &SchemaTypeConfig) -> Self {
        let values = config
            .fields
            .iter()
            .filter_map(|f| f.default_value.clone().map(|v| (f.id.clone(), v)))
            .collect();
        Self { values }
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    pub fn with(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(id, value);
        self
    }

    /// Raw value as typed
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Trimmed value, `None` when absent or blank
    pub fn value(&self, id: &str) -> Option<&str> {
        self.get(id).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormState {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// One input control, ready for a rendering surface
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub input_type: String,
    pub placeholder: String,
    /// Initial value of the control
    pub value: String,
    pub multiline: bool,
}

/// The full set of controls for one schema type, in catalog order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSurface {
    /// Resolved key; differs from the requested one when it fell back
    pub schema_type: String,
    pub controls: Vec<Control>,
}

pub struct FormRenderer;

impl FormRenderer {
    /// Build a fresh surface for `key`, seeded with field defaults.
    pub fn render(catalog: &FieldCatalog, key: &str) -> FormSurface {
        let config = catalog.resolve(key);
        Self::render_with(config, &FormState::seeded(config))
    }

    /// Build a surface whose controls show the values in `state`.
    pub fn render_with(config: &SchemaTypeConfig, state: &FormState) -> FormSurface {
        let controls = config
            .fields
            .iter()
            .map(|field| Control {
                id: field.id.clone(),
                label: field.label.clone(),
                kind: field.kind,
                input_type: field.kind.input_type().to_string(),
                placeholder: field.placeholder.clone(),
                value: state.get(&field.id).unwrap_or_default().to_string(),
                multiline: field.kind.is_multiline(),
            })
            .collect();

        FormSurface {
            schema_type: config.key.clone(),
            controls,
        }
    }
}
