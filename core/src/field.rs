//! Field descriptors: one input on the generated form and its binding
//! into the output document.

use serde::{Deserialize, Serialize};

use crate::path::PropertyPath;

/// Kind of input control a field is rendered as
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Url,
    Number,
    Email,
    Tel,
    Date,
    Datetime,
    Textarea,
}

impl FieldKind {
    /// HTML `type` attribute for the control. Textareas report "text".
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "text",
            Self::Url => "url",
            Self::Number => "number",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Datetime => "datetime-local",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

/// How a raw string value becomes a JSON value in the document
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueShape {
    /// Trimmed string, as typed
    #[default]
    Text,
    /// Whole number
    Integer,
    /// Finite decimal number
    Number,
    /// Comma or newline separated list of strings
    List,
    /// JSON author list, each entry a Person
    Authors,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    Datetime,
}

/// A single input on the form for one schema type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique within its schema type
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub placeholder: String,
    /// Value the control is pre-filled with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Where the value is written in the document
    pub target: PropertyPath,
    #[serde(default)]
    pub shape: ValueShape,
    /// A blank date field becomes "now" shifted by this many days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub now_offset_days: Option<i64>,
}

impl FieldDescriptor {
    pub fn new(id: &str, label: &str, kind: FieldKind, target: &str) -> Self {
        let shape = match kind {
            FieldKind::Number => ValueShape::Integer,
            FieldKind::Date => ValueShape::Date,
            FieldKind::Datetime => ValueShape::Datetime,
            _ => ValueShape::Text,
        };
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind,
            placeholder: String::new(),
            default_value: None,
            // A malformed path becomes the root, which catalog validation rejects
            target: PropertyPath::parse(target).unwrap_or_default(),
            shape,
            now_offset_days: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn shape(mut self, shape: ValueShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn defaults_to_now(mut self, offset_days: i64) -> Self {
        self.now_offset_days = Some(offset_days);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_picks_shape() {
        assert_eq!(
            FieldDescriptor::new("count", "Count", FieldKind::Number, "count").shape,
            ValueShape::Integer
        );
        assert_eq!(
            FieldDescriptor::new("when", "When", FieldKind::Datetime, "startDate").shape,
            ValueShape::Datetime
        );
        assert_eq!(
            FieldDescriptor::new("bio", "Bio", FieldKind::Textarea, "description").shape,
            ValueShape::Text
        );
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldKind::Datetime.input_type(), "datetime-local");
        assert_eq!(FieldKind::Tel.input_type(), "tel");
        assert!(FieldKind::Textarea.is_multiline());
        assert!(!FieldKind::Url.is_multiline());
    }

    #[test]
    fn test_deserialize_minimal_descriptor() {
        let yaml = "id: venue\nlabel: Venue\ntarget: location.name\n";
        let field: FieldDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.shape, ValueShape::Text);
        assert_eq!(field.target.to_string(), "location.name");
        assert!(field.now_offset_days.is_none());
    }
}
