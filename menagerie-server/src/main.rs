//! # Menagerie Server
//!
//! REST service for the animal catalogue.
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - PostgreSQL for persistent storage when `DATABASE_URL` is set
//! - an in-memory store (optionally seeded from JSON) otherwise

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use menagerie_core::{DuplicateIdPolicy, PostgresAnimalRepository};
use menagerie_server::{
    create_app,
    infra::{
        config::{
            Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigOverrides,
            ConfigWarnings,
        },
        startup::{build_repository, build_state},
    },
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "menagerie-server")]
#[command(about = "REST service for the animal catalogue")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// PostgreSQL connection URL (overrides config)
    #[arg(long)]
    database_url: Option<String>,

    /// What a create does with an id that already exists: reject or overwrite
    #[arg(long)]
    duplicate_ids: Option<DuplicateIdPolicy>,

    /// JSON file of animals loaded into the in-memory store
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Loading configuration also reads .env, so RUST_LOG set there reaches
    // the filter. Warnings are held until the subscriber exists.
    let ConfigLoad { config, warnings } = load_runtime_config(&cli.serve)?;

    init_tracing();
    report_config(&config, &warnings);

    let config = Arc::new(config);

    if let Some(Command::Db(DbCommand::Migrate)) = cli.command {
        return run_db_migrate(&config).await;
    }

    run_server(config).await
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<ConfigLoad> {
    let options = ConfigLoaderOptions {
        config_path: args.config.clone(),
        env_file: args.env_file.clone(),
        overrides: ConfigOverrides {
            host: args.host.clone(),
            port: args.port,
            database_url: args.database_url.clone(),
            duplicate_ids: args.duplicate_ids,
            seed_path: args.seed.clone(),
        },
    };

    ConfigLoader::with_options(options)
        .load()
        .context("failed to load configuration")
}

fn report_config(config: &Config, warnings: &ConfigWarnings) {
    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }

    info!(
        store.persistent = config.is_persistent(),
        store.duplicate_ids = %config.store.duplicate_ids,
        cors.origins = config.cors.allowed_origins.len(),
        "configuration in effect"
    );
}

async fn run_db_migrate(config: &Config) -> anyhow::Result<()> {
    let url = config
        .database
        .url
        .as_deref()
        .context("DATABASE_URL or [database].url must be set to run migrations")?;
    let repository = PostgresAnimalRepository::connect(url)
        .await
        .context("failed to connect to PostgreSQL for migration")?;
    repository
        .migrate()
        .await
        .context("database migration failed")?;
    info!("Database migrations applied successfully");
    Ok(())
}

async fn run_server(config: Arc<Config>) -> anyhow::Result<()> {
    let repository = build_repository(&config).await?;
    let state = build_state(Arc::clone(&config), repository);
    let router = create_app(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Starting Menagerie server on {}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
