//! Artist catalog service binary
//!
//! Commands: `start`, `validate`, `init`, `seed`.

use anyhow::{Context, Result};
use artists::{api, seed_artists, ArtistStore, InMemoryArtistStore, PostgresArtistStore};
use cli::{Cli, Commands};
use config::{generate_default_config, load_config, load_or_default, save_config, validate_config, ServiceConfig};
use observability::{init_logging, init_metrics, LogFormat};
use server::{HttpServer, ServerConfig, ServerExt};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Start {
            config,
            http,
            host,
            seed,
        } => {
            let config = prepare(&config)?;
            start_service(config, http, host, seed).await
        }
        Commands::Validate { config } => {
            init_logging("artistd", LogFormat::Pretty)?;
            validate_command(config)
        }
        Commands::Init { output } => {
            init_logging("artistd", LogFormat::Pretty)?;
            init_command(output)
        }
        Commands::Seed { config } => {
            let config = prepare(&config)?;
            seed_command(config).await
        }
    }
}

/// Load config, refuse to continue on validation errors, then start logging
/// in the configured format.
fn prepare(path: &Path) -> Result<ServiceConfig> {
    let config = load_or_default(path)?;

    let format = LogFormat::parse(&config.logging.format).unwrap_or_default();
    init_logging(&config.service.name, format)?;
    debug!(?config, "Configuration resolved");

    let report = validate_config(&config);
    for warning in &report.warnings {
        warn!(field = %warning.field, message = %warning.message, "Configuration warning");
    }
    if !report.is_valid() {
        for err in &report.errors {
            error!("{}", err);
        }
        anyhow::bail!("Cannot start due to configuration errors");
    }

    Ok(config)
}

/// Connect the configured store. The caller owns it until `close()`.
async fn build_store(config: &ServiceConfig) -> Result<Arc<dyn ArtistStore>> {
    match config.storage.storage_type.to_lowercase().as_str() {
        "postgres" => {
            let pg = config
                .storage
                .postgres
                .as_ref()
                .context("postgres storage selected without a postgres section")?;

            let store = PostgresArtistStore::connect(
                &pg.url,
                pg.max_connections,
                Duration::from_secs(pg.connection_timeout_seconds),
            )
            .await?;

            if pg.run_migrations {
                store.run_migrations().await?;
            }
            Ok(Arc::new(store))
        }
        _ => {
            info!("Using in-memory artist store");
            Ok(Arc::new(InMemoryArtistStore::new()))
        }
    }
}

async fn start_service(
    config: ServiceConfig,
    http_override: Option<u16>,
    host_override: Option<String>,
    seed: bool,
) -> Result<()> {
    let server_config = ServerConfig::new(
        host_override.unwrap_or_else(|| config.server.host.clone()),
        http_override.unwrap_or(config.server.http_port),
    );

    if config.metrics.enabled {
        init_metrics(&server_config.host, config.metrics.port)?;
    }

    let store = build_store(&config).await?;
    info!(store = store.name(), "Artist store ready");

    if seed {
        seed_artists(store.as_ref()).await?;
    }

    let router = api::create_router(api::create_api_state(Arc::clone(&store)));
    let server = HttpServer::new(server_config, &config.service.name, router);

    let result = server.run_with_ctrl_c().await;

    store.close().await;
    result.context("HTTP server failed")
}

async fn seed_command(config: ServiceConfig) -> Result<()> {
    if config.storage.storage_type.eq_ignore_ascii_case("memory") {
        warn!("Seeding the in-memory store has no lasting effect; use `start --seed` instead");
    }

    let store = build_store(&config).await?;
    let seeded = seed_artists(store.as_ref()).await;
    store.close().await;

    for artist in seeded? {
        println!("{}\t{}", artist.id, artist.name);
    }
    Ok(())
}

fn validate_command<P: AsRef<Path>>(config_path: P) -> Result<()> {
    info!(path = ?config_path.as_ref(), "Validating configuration");

    let config = load_config(&config_path)?;
    let report = validate_config(&config);

    println!("\n=== Configuration Validation Report ===\n");

    if !report.warnings.is_empty() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  [warn] [{}] {}", warning.field, warning.message);
        }
        println!();
    }

    if !report.errors.is_empty() {
        println!("Errors ({}):", report.errors.len());
        for err in &report.errors {
            println!("  [error] {}", err);
        }
        println!();
        anyhow::bail!("Configuration validation failed");
    }

    println!("[ok] Configuration is valid!");
    println!();
    println!("Service: {}", config.service.name);
    println!("Listen: {}:{}", config.server.host, config.server.http_port);
    println!("Storage: {}", config.storage.storage_type);

    Ok(())
}

fn init_command<P: AsRef<Path>>(output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    info!(?output_path, "Initializing new configuration file");

    let config = generate_default_config();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    save_config(&config, output_path)?;

    println!("[ok] Configuration file created at {:?}", output_path);
    println!();
    println!("Next steps:");
    println!("  1. Set storage.type to postgres and fill storage.postgres.url to persist artists");
    println!("  2. Run 'artistd validate --config {:?}'", output_path);
    println!("  3. Run 'artistd start --config {:?}'", output_path);

    Ok(())
}
