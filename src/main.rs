use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fest_catalog_server::catalog::EventCatalog;
use fest_catalog_server::config::FileConfig;
use fest_catalog_server::server::{run_server, RequestsLoggingLevel, ServerConfig};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the events JSON dataset.
    #[clap(value_parser = parse_path)]
    pub data_path: PathBuf,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3000)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend assets directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Optional TOML config file, its values override the CLI.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Load and report on the dataset, then exit without serving.
    #[clap(long)]
    pub check_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    if let Some(config_path) = &cli_args.config {
        let file_config = FileConfig::load(config_path)?;
        if let Some(data_path) = file_config.data_path {
            cli_args.data_path = parse_path(&data_path)?;
        }
        if let Some(port) = file_config.port {
            cli_args.port = port;
        }
        if let Some(level) = file_config.logging_level {
            cli_args.logging_level = match level.to_lowercase().as_str() {
                "none" => RequestsLoggingLevel::None,
                "path" => RequestsLoggingLevel::Path,
                "headers" => RequestsLoggingLevel::Headers,
                "body" => RequestsLoggingLevel::Body,
                other => anyhow::bail!("Unknown logging level in config file: {}", other),
            };
        }
        if let Some(frontend_dir_path) = file_config.frontend_dir_path {
            cli_args.frontend_dir_path = Some(frontend_dir_path);
        }
    }

    let catalog = EventCatalog::new(&cli_args.data_path);

    let events = catalog.load();
    info!(
        "Catalog at {} has {} events",
        catalog.data_path().display(),
        events.len()
    );

    if cli_args.check_only {
        for event in events.iter() {
            info!("- {} {}", event.event_id, event.title);
        }
        return Ok(());
    }

    let config = ServerConfig {
        requests_logging_level: cli_args.logging_level,
        port: cli_args.port,
        frontend_dir_path: cli_args.frontend_dir_path,
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(config, Arc::new(catalog)).await
}
