//! REST menus server.
//!
//! Serves a host menu snapshot over the read-only menu API.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rest_menus_kernel::store::snapshot::load_snapshot;
use rest_menus_kernel::{AppState, Config, cli, routes};

/// Read-only REST API for site navigation menus.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the menu API (default).
    Serve {
        /// Snapshot file to serve (overrides MENU_SNAPSHOT).
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Port to listen on (overrides PORT).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Check a snapshot for orphaned, duplicated, or looping menu items.
    Check {
        /// Snapshot file to check.
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;

    match args.command {
        Some(Command::Check { path }) => {
            let ok = cli::cmd_check(&path, config.max_menu_depth)?;
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Some(Command::Serve { snapshot, port }) => {
            if let Some(snapshot) = snapshot {
                config.menu_snapshot = Some(snapshot);
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            serve(config).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting REST menus server");

    let snapshot = config
        .menu_snapshot
        .as_deref()
        .context("MENU_SNAPSHOT (or --snapshot) is required to serve")?;
    let store = load_snapshot(snapshot).context("failed to load menu snapshot")?;

    let state = AppState::new(&config, Arc::new(store));
    info!(prefix = %state.api_prefix(), port = config.port, "Configuration loaded");

    let cors = build_cors_layer(&config);

    let app = routes::build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
