//! # ldforge-core
//!
//! Structured-data (schema.org JSON-LD) generation from simple forms.
//!
//! - [`catalog`]: schema types, their fields and default documents
//! - [`form`]: form state and the control surface built from a type
//! - [`builder`]: form values to document, with per-field fallbacks
//! - [`preview`]: pretty JSON text and highlighted markup
//! - [`actions`]: download, copy feedback, validator link, guide
//! - [`session`]: the state of one editing session
//!
//! ```
//! use ldforge_core::{FieldCatalog, FormState, Preview, SchemaBuilder};
//!
//! let catalog = FieldCatalog::builtin();
//! let form = FormState::new().with("name", "Widget");
//! let document = SchemaBuilder::new(&catalog).build("product", &form);
//!
//! let preview = Preview::render(&document);
//! assert!(preview.text.contains("\"name\": \"Widget\""));
//! ```

pub mod actions;
mod builtin;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod field;
pub mod form;
pub mod path;
pub mod preview;
pub mod session;
pub mod theme;
pub mod values;

pub use actions::{CopyFeedback, Download, GuideSection, VALIDATOR_URL};
pub use builder::{BuildReport, BuildWarning, BuilderOptions, SchemaBuilder, StructuredDataDocument};
pub use catalog::{FieldCatalog, SchemaTypeConfig, DEFAULT_SCHEMA_TYPE, MAX_NOW_OFFSET_DAYS};
pub use error::{CatalogError, PathError, ValueError};
pub use field::{FieldDescriptor, FieldKind, ValueShape};
pub use form::{Control, FormRenderer, FormState, FormSurface};
pub use path::PropertyPath;
pub use preview::{Preview, PreviewFormat};
pub use session::{PreviewUpdate, Session, SessionConfig};
pub use theme::{PreferenceStore, Theme};
