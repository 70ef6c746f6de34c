use thiserror::Error;

/// Problems found while validating a field catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Default schema type '{0}' is not in the catalog")]
    UnknownDefault(String),
}

/// A property path string that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path '{path}': index '{index}' is not a number")]
    BadIndex { path: String, index: String },

    #[error("path '{0}': unclosed '['")]
    Unclosed(String),

    #[error("path '{0}': empty property name")]
    EmptyProperty(String),
}

/// A raw form value that could not be turned into its target shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("'{0}' is not a whole number")]
    Integer(String),

    #[error("'{0}' is not a number")]
    Number(String),

    #[error("author list is not valid: {0}")]
    Authors(String),

    #[error("'{0}' is not a recognised date")]
    Date(String),

    #[error("'{0}' is not a recognised date and time")]
    DateTime(String),

    #[error("{0} days from now is out of range")]
    NowOffset(i64),
}
