use clap::Parser;
use ldforge::adapters::api_handler::ApiState;
use ldforge::cli::{Cli, Command};
use ldforge::config::{reload_catalog, watcher::ConfigWatcher, Settings};
use ldforge_core::actions::implementation_guide;
use ldforge_core::{BuilderOptions, Download, FieldCatalog, FormRenderer, PreviewFormat, Session, VALIDATOR_URL};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let catalog = settings.load_catalog()?;
    let options = BuilderOptions {
        utc_offset: settings.builder.offset().map_err(anyhow::Error::msg)?,
    };

    match cli.command() {
        Command::Serve => serve(cli, settings, catalog, options).await,
        Command::Types => {
            for t in catalog.types() {
                println!("{:<16} {:<24} {}", t.key, t.label, t.schema_type());
            }
            Ok(())
        }
        Command::Fields { schema_type } => {
            let surface = FormRenderer::render(&catalog, &schema_type);
            if surface.schema_type != schema_type {
                warn!(requested = %schema_type, resolved = %surface.schema_type, "Unknown schema type, using default");
            }
            for control in surface.controls {
                println!("{:<20} {:<16} {}", control.id, control.input_type, control.label);
            }
            Ok(())
        }
        Command::Build {
            schema_type,
            values,
            format,
            output,
        } => build(catalog, options, &schema_type, values, format, output),
        Command::Guide => {
            for section in implementation_guide() {
                println!("{}\n\n{}\n\n{}\n", section.title, section.body, section.snippet);
            }
            Ok(())
        }
        Command::ValidateUrl => {
            println!("{}", VALIDATOR_URL);
            Ok(())
        }
    }
}

fn build(
    catalog: FieldCatalog,
    options: BuilderOptions,
    schema_type: &str,
    values: Vec<(String, String)>,
    format: PreviewFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut session = Session::new(Arc::new(catalog), schema_type).with_options(options);
    if session.schema_type() != schema_type {
        warn!(requested = %schema_type, resolved = %session.schema_type(), "Unknown schema type, using default");
    }

    for (id, value) in &values {
        if !session.input(id, value) {
            warn!(field = %id, schema_type = %session.schema_type(), "No such field, value ignored");
        }
    }

    let update = session.preview();
    for warning in &update.warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }

    match output {
        Some(dir) => {
            let path = Download::from_preview(&update.preview).write_into(&dir)?;
            println!("{}", path.display());
        }
        None => println!("{}", update.preview.format(format)),
    }
    Ok(())
}

async fn serve(
    cli: Cli,
    settings: Settings,
    catalog: FieldCatalog,
    options: BuilderOptions,
) -> anyhow::Result<()> {
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!("Starting ldforge on {}:{}", host, port);
    info!(schema_types = catalog.len(), "Schema catalog loaded");

    let state = ApiState::new(catalog, options);

    // Reload swaps the catalog; a failed reload keeps the previous one
    let catalog_for_watcher = state.catalog.clone();
    let cli_for_watcher = cli.clone();
    let paths = vec![cli.config.clone(), settings.catalog_dir()];
    let _watcher = ConfigWatcher::new(paths, move || {
        match reload_catalog(&cli_for_watcher, &catalog_for_watcher) {
            Ok(count) => info!(schema_types = count, "Configuration reloaded successfully"),
            Err(e) => error!("Failed to reload configuration: {}", e),
        }
    })?;

    let app = ldforge::create_app(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
