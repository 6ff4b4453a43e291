//! Startup orchestration.
//!
//! # Responsibilities
//! - Resolve the route manifest against the handler catalog
//! - Apply the resulting bundle to a fresh axum engine
//! - Publish the registered route table
//!
//! # Design Decisions
//! - Fail fast: any unknown handler or refused route is fatal
//! - Routes are registered before the listener is bound

use axum::Router;
use thiserror::Error;

use crate::config::MillConfig;
use crate::http::engine::{AxumEngine, RegisterError};
use crate::http::handlers::{builtin_catalog, PublishedRoutes};
use crate::routing::{CatalogError, HandlerCatalog, RouteInfo};
use crate::server::Server;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// A router with every manifest route registered, plus its route table.
#[derive(Debug)]
pub struct App {
    pub router: Router,
    pub routes: Vec<RouteInfo>,
}

/// Build the application from config using the built-in handlers.
pub fn build_app(config: &MillConfig) -> Result<App, StartupError> {
    let published = PublishedRoutes::default();
    let catalog = builtin_catalog(published.clone());
    let app = build_app_with(config, &catalog)?;

    // The `routes` handler reads this; set exactly once, right here.
    let _ = published.set(app.routes.clone());
    Ok(app)
}

/// Build the application from config against a caller-supplied catalog.
pub fn build_app_with(config: &MillConfig, catalog: &HandlerCatalog) -> Result<App, StartupError> {
    let bundle = catalog.bundle(&config.routes)?;

    let engine = AxumEngine::with_policy(Router::new(), config.registration.duplicate_policy);
    let mut server = Server::new(engine);
    server.with(&bundle)?;

    let routes = server.routes();
    for route in &routes {
        tracing::info!(method = %route.method, path = %route.path, handler = %route.handler, "Route registered");
    }

    Ok(App {
        router: server.into_engine().into_router(),
        routes,
    })
}
