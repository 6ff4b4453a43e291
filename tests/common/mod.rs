//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use routemill::config::MillConfig;
use routemill::http::HttpServer;
use routemill::lifecycle::{build_app, Shutdown};
use routemill::RouteHandler;
use tokio::net::TcpListener;

pub async fn get_handler(_req: Request<Body>) -> &'static str {
    "get"
}

pub async fn post_handler(_req: Request<Body>) -> &'static str {
    "post"
}

pub fn get() -> RouteHandler {
    RouteHandler::named("get", get_handler)
}

pub fn post() -> RouteHandler {
    RouteHandler::named("post", post_handler)
}

/// Build the app from `config` and serve it on an ephemeral port.
pub async fn spawn_app(mut config: MillConfig) -> (SocketAddr, Shutdown) {
    config.server.bind_address = "127.0.0.1:0".to_string();
    let app = build_app(&config).expect("app builds");

    let listener = TcpListener::bind(&config.server.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(app.router, config.server.clone());
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}
