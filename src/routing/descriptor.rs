//! Route descriptors.

use serde::Serialize;

use crate::routing::handler::RouteHandler;

/// One routable endpoint: method, path pattern and handler.
///
/// Nothing is validated here. A malformed method or path is only reported
/// when the descriptor is applied to an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor<H = RouteHandler> {
    method: String,
    path: String,
    handler: H,
}

impl<H> RouteDescriptor<H> {
    pub fn new(method: impl Into<String>, path: impl Into<String>, handler: H) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

impl RouteDescriptor<RouteHandler> {
    /// Describe this descriptor the way a route table reports it.
    pub fn info(&self) -> RouteInfo {
        RouteInfo::new(&self.method, &self.path, self.handler.name())
    }
}

/// A registered route as reported by an engine's route table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub handler: String,
}

impl RouteInfo {
    pub fn new(method: impl Into<String>, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            handler: handler.into(),
        }
    }
}
