use chrono::{DateTime, FixedOffset};
use config::{Config, Environment, File};
use ldforge_core::{CatalogError, FieldCatalog, SchemaTypeConfig, DEFAULT_SCHEMA_TYPE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

pub mod validator;
pub mod watcher;

use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub builder: BuilderSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    /// Extra schema types loaded from `catalog.dir`
    #[serde(skip)]
    pub schema_types: Vec<SchemaTypeConfig>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BuilderSettings {
    /// Offset for "now" timestamps and offset-less date-times, e.g. "-05:00"
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
        }
    }
}

impl BuilderSettings {
    pub fn offset(&self) -> Result<FixedOffset, String> {
        parse_offset(&self.utc_offset)
    }
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Schema type used for unknown keys
    #[serde(default = "default_schema_type")]
    pub default_type: String,
    /// Directory holding extra schema type definitions
    #[serde(default = "default_catalog_dir")]
    pub dir: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            default_type: default_schema_type(),
            dir: default_catalog_dir(),
        }
    }
}

fn default_schema_type() -> String {
    DEFAULT_SCHEMA_TYPE.to_string()
}

fn default_catalog_dir() -> String {
    "config/schema_types".to_string()
}

/// Parse "+05:30", "-05:00", "Z" or "UTC".
pub fn parse_offset(raw: &str) -> Result<FixedOffset, String> {
    let raw = raw.trim();
    let suffix = if raw.eq_ignore_ascii_case("utc") { "Z" } else { raw };
    DateTime::parse_from_rfc3339(&format!("2000-01-01T00:00:00{}", suffix))
        .map(|dt| *dt.offset())
        .map_err(|e| format!("'{}' is not a UTC offset like +02:00: {}", raw, e))
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let s = Self::builder(config_path)?;
        let mut settings: Settings = s.try_deserialize()?;
        settings.root = root.to_path_buf();

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);
        settings.finish()
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("ldforge");
        let s = Self::builder(&config_path)?;
        let mut settings: Settings = s.try_deserialize()?;
        settings.root = PathBuf::from(root);
        settings.finish()
    }

    fn builder(config_path: &Path) -> Result<Config, anyhow::Error> {
        Ok(Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(Environment::with_prefix("LDFORGE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .build()?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(default_type) = &cli.default_type {
            self.catalog.default_type = default_type.clone();
        }
    }

    /// Load external schema types and validate the result.
    fn finish(mut self) -> Result<Self, anyhow::Error> {
        let dir = self.catalog_dir();
        self.load_schema_types_from_dir(&dir)?;

        validator::ConfigValidator::validate(&self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        Ok(self)
    }

    pub fn catalog_dir(&self) -> PathBuf {
        self.root.join(&self.catalog.dir)
    }

    /// Built-in types merged with the loaded ones, default type applied.
    pub fn field_catalog(&self) -> Result<FieldCatalog, Vec<CatalogError>> {
        let mut catalog = FieldCatalog::builtin();
        catalog.extend(self.schema_types.clone())?;
        catalog
            .set_default(&self.catalog.default_type)
            .map_err(|e| vec![e])?;
        Ok(catalog)
    }

    /// [`Settings::field_catalog`] with the catalog errors joined into one
    pub fn load_catalog(&self) -> Result<FieldCatalog, anyhow::Error> {
        self.field_catalog().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!("Invalid schema catalog:\n{}", messages.join("\n"))
        })
    }

    fn load_schema_types_from_dir(&mut self, dir: &Path) -> Result<(), anyhow::Error> {
        let pattern = format!("{}/*", dir.display());
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                        if matches!(ext, "json" | "yaml" | "yml" | "toml") {
                            let content = std::fs::read_to_string(&path)?;
                            let schema_type: SchemaTypeConfig = match ext {
                                "json" => serde_json::from_str(&content)?,
                                "toml" => toml::from_str(&content)?,
                                _ => serde_yaml::from_str(&content)?,
                            };
                            tracing::info!(
                                key = %schema_type.key,
                                path = %path.display(),
                                "Loaded schema type"
                            );
                            self.schema_types.push(schema_type);
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("-05:00").unwrap().local_minus_utc(), -5 * 3600);
        assert_eq!(parse_offset("+05:30").unwrap().local_minus_utc(), 5 * 3600 + 1800);
        assert!(parse_offset("EST").is_err());
    }

    #[test]
    fn test_field_catalog_applies_default_type() {
        let mut settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            builder: Default::default(),
            catalog: Default::default(),
            schema_types: vec![],
            root: PathBuf::from("."),
        };
        settings.catalog.default_type = "product".to_string();

        let catalog = settings.field_catalog().unwrap();
        assert_eq!(catalog.resolve("unknown").key, "product");
    }
}

/// Re-read the configuration behind `cli` and swap it into `catalog`,
/// returning the new type count. On error `catalog` is left untouched.
///
/// Blocks on the write lock, so call it from a non-async thread.
pub fn reload_catalog(cli: &Cli, catalog: &RwLock<FieldCatalog>) -> Result<usize, anyhow::Error> {
    let new_catalog = Settings::new_with_cli(cli)?.load_catalog()?;
    let count = new_catalog.len();
    *catalog.blocking_write() = new_catalog;
    Ok(count)
}
