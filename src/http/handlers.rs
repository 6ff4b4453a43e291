//! Built-in handlers available to route manifests.

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::routing::{HandlerCatalog, RouteHandler, RouteInfo};

/// Route table published once registration has finished.
pub type PublishedRoutes = Arc<OnceLock<Vec<RouteInfo>>>;

#[derive(Serialize)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub async fn health(_req: Request<Body>) -> &'static str {
    "ok"
}

pub async fn version(_req: Request<Body>) -> Json<VersionInfo> {
    Json(VersionInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Returns the request body unchanged.
pub async fn echo(req: Request<Body>) -> Response {
    match axum::body::to_bytes(req.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes.into_response(),
        Err(_) => (StatusCode::PAYLOAD_TOO_LARGE, "Body too large").into_response(),
    }
}

fn list_routes(published: PublishedRoutes) -> RouteHandler {
    RouteHandler::named("routes", move |_req: Request<Body>| {
        let published = published.clone();
        async move {
            match published.get() {
                Some(routes) => Json(routes.clone()).into_response(),
                None => (StatusCode::SERVICE_UNAVAILABLE, "Routes not published yet").into_response(),
            }
        }
    })
}

/// Catalog of every built-in handler. `routes` serves whatever is later
/// published into `published`.
pub fn builtin_catalog(published: PublishedRoutes) -> HandlerCatalog {
    let mut catalog = HandlerCatalog::new();
    catalog
        .insert("health", RouteHandler::named("health", health))
        .insert("version", RouteHandler::named("version", version))
        .insert("echo", RouteHandler::named("echo", echo))
        .insert("routes", list_routes(published));
    catalog
}
