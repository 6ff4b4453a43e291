//! routemill: serve a TOML route manifest with axum.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use routemill::config::{load_config, MillConfig};
use routemill::http::HttpServer;
use routemill::lifecycle::{build_app, signals, Shutdown};
use routemill::observability::{init_logging, metrics};

#[derive(Parser)]
#[command(name = "routemill")]
#[command(about = "Register a predefined route bundle and serve it", long_about = None)]
struct Cli {
    /// TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `server.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => MillConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }

    init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "routemill starting");
    tracing::info!(
        bind_address = %config.server.bind_address,
        routes = config.routes.len(),
        duplicate_policy = ?config.registration.duplicate_policy,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr);
    }

    let app = build_app(&config)?;
    if app.routes.is_empty() {
        tracing::warn!("Route manifest is empty; every request will 404");
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(&shutdown);

    let server = HttpServer::new(app.router, config.server.clone());
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
