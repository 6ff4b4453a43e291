//! Named handlers and manifest resolution.

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::RouteConfig;
use crate::routing::{RouteBundle, RouteDescriptor, RouteHandler};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("route {method} {path} refers to unknown handler {name:?}")]
    UnknownHandler {
        name: String,
        method: String,
        path: String,
    },
}

/// Handlers a route manifest may refer to by name.
#[derive(Debug, Clone, Default)]
pub struct HandlerCatalog {
    handlers: HashMap<String, RouteHandler>,
}

impl HandlerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a handler.
    pub fn insert(&mut self, name: impl Into<String>, handler: RouteHandler) -> &mut Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RouteHandler> {
        self.handlers.get(name)
    }

    /// Sorted handler names.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a manifest into a bundle, keeping manifest order.
    pub fn bundle(&self, routes: &[RouteConfig]) -> Result<RouteBundle, CatalogError> {
        routes
            .iter()
            .map(|r| -> Result<RouteDescriptor, CatalogError> {
                let handler = self
                    .get(&r.handler)
                    .ok_or_else(|| CatalogError::UnknownHandler {
                        name: r.handler.clone(),
                        method: r.method.clone(),
                        path: r.path.clone(),
                    })?;
                Ok(RouteDescriptor::new(&r.method, &r.path, handler.clone()))
            })
            .collect()
    }
}
