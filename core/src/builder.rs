//! Schema builder: form values in, structured-data document out
//!
//! Every schema type is built the same way. The type's template is the
//! document with all defaults filled in; each field whose value is present
//! and well formed overwrites its target path. Nothing here fails: blank
//! input keeps the default, malformed input keeps the default and leaves
//! a [`BuildWarning`] behind.

use chrono::{DateTime, Datelike, Duration, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::FieldCatalog;
use crate::error::ValueError;
use crate::field::{FieldDescriptor, ValueShape};
use crate::form::FormState;
use crate::values;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Offset used for "now" and for date-times entered without one
    pub utc_offset: FixedOffset,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            utc_offset: Utc.fix(),
        }
    }
}

/// A generated schema.org document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredDataDocument(Value);

impl StructuredDataDocument {
    /// The declared `@type`, or "" for a document without one
    pub fn schema_type(&self) -> &str {
        self.0.get("@type").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// 2-space indented JSON text
    pub fn to_pretty(&self) -> String {
        // Serializing a Value cannot fail: keys are always strings.
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

impl From<Value> for StructuredDataDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// A field whose input could not be used and was replaced by its default
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWarning {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BuildReport {
    pub document: StructuredDataDocument,
    pub warnings: Vec<BuildWarning>,
}

#[derive(Clone, Debug)]
pub struct SchemaBuilder<'a> {
    catalog: &'a FieldCatalog,
    options: BuilderOptions,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self {
            catalog,
            options: BuilderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: BuilderOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the document for `key` as of the current time.
    pub fn build(&self, key: &str, form: &FormState) -> StructuredDataDocument {
        self.build_at(key, form, self.now()).document
    }

    /// Current time in the configured offset
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.options.utc_offset)
    }

    /// Build the document for `key`, treating `now` as the current time.
    pub fn build_at(
        &self,
        key: &str,
        form: &FormState,
        now: DateTime<FixedOffset>,
    ) -> BuildReport {
        let config = self.catalog.resolve(key);
        let mut document = config.template.clone();
        let mut warnings = Vec::new();

        for field in &config.fields {
            let resolved = match form.value(&field.id) {
                Some(raw) => self.convert(field, raw),
                None => Ok(None),
            };

            let value = match resolved {
                Ok(Some(value)) => Some(value),
                Ok(None) => self.blank_value(field, now).unwrap_or_else(|err| {
                    tracing::warn!(
                        schema_type = %config.key,
                        field = %field.id,
                        "Keeping template value: {}",
                        err
                    );
                    warnings.push(BuildWarning {
                        field: field.id.clone(),
                        message: err.to_string(),
                    });
                    None
                }),
                Err(err) => {
                    tracing::warn!(
                        schema_type = %config.key,
                        field = %field.id,
                        "Falling back to default: {}",
                        err
                    );
                    warnings.push(BuildWarning {
                        field: field.id.clone(),
                        message: err.to_string(),
                    });
                    self.blank_value(field, now).ok().flatten()
                }
            };

            if let Some(value) = value {
                field.target.set(&mut document, value);
            }
        }

        BuildReport {
            document: StructuredDataDocument(document),
            warnings,
        }
    }

    /// Convert present input. `Ok(None)` means the input reduced to nothing.
    fn convert(&self, field: &FieldDescriptor, raw: &str) -> Result<Option<Value>, ValueError> {
        let value = match field.shape {
            ValueShape::Text => Value::String(raw.to_string()),
            ValueShape::Integer => values::parse_integer(raw)?,
            ValueShape::Number => values::parse_number(raw)?,
            ValueShape::List => {
                let items = values::split_multi(raw);
                if items.is_empty() {
                    return Ok(None);
                }
                Value::from(items)
            }
            ValueShape::Authors => {
                let authors = values::parse_authors(raw)?;
                if authors.is_empty() {
                    return Ok(None);
                }
                Value::Array(authors)
            }
            ValueShape::Date => Value::String(values::normalize_date(raw)?),
            ValueShape::Datetime => {
                Value::String(values::normalize_datetime(raw, self.options.utc_offset)?)
            }
        };
        Ok(Some(value))
    }

    /// Value for a field left blank: "now" for date fields that ask for it,
    /// otherwise nothing, so the template literal stays.
    fn blank_value(
        &self,
        field: &FieldDescriptor,
        now: DateTime<FixedOffset>,
    ) -> Result<Option<Value>, ValueError> {
        let Some(days) = field.now_offset_days else {
            return Ok(None);
        };
        // RFC 3339 output needs a four digit year
        let at = Duration::try_days(days)
            .and_then(|delta| now.checked_add_signed(delta))
            .filter(|at| (0..=9999).contains(&at.year()))
            .ok_or(ValueError::NowOffset(days))?;
        let text = match field.shape {
            ValueShape::Date => at.format("%Y-%m-%d").to_string(),
            _ => values::format_timestamp(at),
        };
        Ok(Some(Value::String(text)))
    }
}
