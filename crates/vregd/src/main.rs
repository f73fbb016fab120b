//! vregd - Vehicle Registry Daemon
//!
//! REST API server for the vehicle CRUD resource.
//!
//! Usage:
//!   vregd [config.toml]
//!
//! The optional config file carries a `[server]` table with `host` and
//! `port`. Without one, the server listens on 0.0.0.0:3000.

use std::net::SocketAddr;
use std::sync::Arc;

use vreg_api::{create_router, AppState};
use vreg_core::VehicleStore;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args { config_path: None };

    for arg in &args {
        match arg.as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            a if !a.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(a.to_string());
            }
            _ => {
                tracing::warn!("Unknown argument: {}", arg);
            }
        }
    }

    result
}

fn print_help() {
    eprintln!(
        r#"vregd - Vehicle Registry Daemon

Usage: vregd [OPTIONS] [config.toml]

Options:
  -h, --help  Print this help message

Examples:
  # Run with defaults (0.0.0.0:3000)
  vregd

  # Run with a config file
  vregd config.toml
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vregd=info,vreg_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting vregd (Vehicle Registry Daemon)");

    let args = parse_args();

    let (host, port) = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        load_config_file(path)?
    } else {
        (DEFAULT_HOST.to_string(), DEFAULT_PORT)
    };

    // Fresh, empty collection; records live for the process lifetime
    let store = Arc::new(VehicleStore::new());
    let state = AppState::with_store(store);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", host, port, e))?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load `[server]` host/port from a TOML config file
fn load_config_file(path: &str) -> anyhow::Result<(String, u16)> {
    let content = std::fs::read_to_string(path)?;
    let config: toml::Value = toml::from_str(&content)?;

    let server = config.get("server");

    let host = server
        .and_then(|s| s.get("host"))
        .and_then(|h| h.as_str())
        .unwrap_or(DEFAULT_HOST)
        .to_string();

    let port = match server.and_then(|s| s.get("port")).and_then(|p| p.as_integer()) {
        Some(value) => u16::try_from(value)
            .map_err(|_| anyhow::anyhow!("Port out of range in {}: {}", path, value))?,
        None => DEFAULT_PORT,
    };

    Ok((host, port))
}
