use clap::{Parser, Subcommand};
use ldforge_core::PreviewFormat;
use std::path::PathBuf;

/// ldforge - schema.org JSON-LD generator for web pages
#[derive(Parser, Debug, Clone)]
#[command(name = "ldforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LDFORGE_CONFIG", default_value = "ldforge.toml")]
    pub config: PathBuf,

    /// Server host address
    #[arg(long, env = "LDFORGE_HOST")]
    pub host: Option<String>,

    /// Server port
    #[arg(long, env = "LDFORGE_PORT")]
    pub port: Option<u16>,

    /// Schema type used when an unknown type is requested
    #[arg(long, env = "LDFORGE_DEFAULT_TYPE")]
    pub default_type: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Serve the generator UI and HTTP API (default)
    Serve,
    /// List the available schema types
    Types,
    /// List the form fields of a schema type
    Fields {
        schema_type: String,
    },
    /// Build a document from field values
    Build {
        schema_type: String,
        /// Field value as id=value, repeatable
        #[arg(long = "set", value_parser = parse_assignment)]
        values: Vec<(String, String)>,
        /// Output format
        #[arg(long, default_value_t = PreviewFormat::Json)]
        format: PreviewFormat,
        /// Write schema.json into this directory instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the implementation guide
    Guide,
    /// Print the rich results validator URL
    ValidateUrl,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=value, got '{}'", raw))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing field id in '{}'", raw));
    }
    Ok((id.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["ldforge"]);
        assert_eq!(cli.config, PathBuf::from("ldforge.toml"));
        assert!(cli.host.is_none());
        assert!(cli.port.is_none());
        assert!(cli.default_type.is_none());
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_cli_with_args() {
        let cli = Cli::parse_from([
            "ldforge",
            "--config",
            "custom.toml",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--default-type",
            "product",
            "serve",
        ]);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.host, Some("0.0.0.0".to_string()));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.default_type, Some("product".to_string()));
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_build_command() {
        let cli = Cli::parse_from([
            "ldforge",
            "build",
            "product",
            "--set",
            "name=Widget",
            "--set",
            "description=A = B",
            "--format",
            "script",
        ]);
        assert_eq!(
            cli.command(),
            Command::Build {
                schema_type: "product".to_string(),
                values: vec![
                    ("name".to_string(), "Widget".to_string()),
                    ("description".to_string(), "A = B".to_string()),
                ],
                format: PreviewFormat::Script,
                output: None,
            }
        );
    }

    #[test]
    fn test_bad_assignment_is_rejected() {
        assert!(Cli::try_parse_from(["ldforge", "build", "product", "--set", "name"]).is_err());
        assert!(Cli::try_parse_from(["ldforge", "build", "product", "--set", "=x"]).is_err());
    }
}
