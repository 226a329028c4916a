use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use roster_core::RosterStore;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_server::{
    config::{self, CatalogConfig, Config, ServerConfig},
    routes::create_app,
    seed,
    state::AppState,
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "roster-server")]
#[command(about = "Activity roster server for Mergington High School")]
struct Cli {
    /// Server host
    #[arg(long, env = "SERVER_HOST", default_value = config::DEFAULT_HOST)]
    host: String,

    /// Server port
    #[arg(long, env = "SERVER_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Catalog TOML file; the built-in catalog is used when absent
    #[arg(long, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Directory the landing page is served from
    #[arg(long, env = "STATIC_DIR", default_value = config::DEFAULT_STATIC_DIR)]
    static_dir: PathBuf,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            server: ServerConfig {
                host: self.host,
                port: self.port,
            },
            catalog: CatalogConfig {
                path: self.catalog,
            },
            static_dir: self.static_dir,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads the environment for fallbacks.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.into_config();

    let catalog = match &config.catalog.path {
        Some(path) => {
            let catalog = seed::load_catalog(path)?;
            info!(
                "Loaded catalog from {}: {} activities",
                path.display(),
                catalog.len()
            );
            catalog
        }
        None => {
            let catalog = seed::builtin_catalog();
            info!("Using built-in catalog: {} activities", catalog.len());
            catalog
        }
    };

    let state = AppState::new(RosterStore::new(catalog));
    let app = create_app(state, &config.static_dir);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Starting Mergington Roster Server on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Shutdown complete");
    Ok(())
}

/// Resolve when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
