//! Axum routing engine adapter.
//!
//! # Responsibilities
//! - Register (method, path, handler) triples on an `axum::Router`
//! - Keep an ordered table of what was registered
//! - Report refused routes as errors instead of letting axum panic
//!
//! # Design Decisions
//! - Checks axum's own preconditions (method filter, path syntax) up front
//! - Identical (method, path) pairs follow the configured `DuplicatePolicy`
//! - Anything axum still refuses (e.g. capture conflicts) is caught and
//!   returned as `RegisterError::Rejected`; the router is left untouched
//! - The process panic hook still runs for those, so a refused route also
//!   prints a `thread '...' panicked at` line on stderr next to the logged error

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use axum::body::Body;
use axum::http::{Method, Request};
use axum::routing::{on, MethodFilter};
use axum::Router;
use thiserror::Error;

use crate::config::schema::DuplicatePolicy;
use crate::routing::{RouteHandler, RouteInfo, RouteRegistrar, RouteTable};

/// Reasons the engine refuses a route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("invalid HTTP method {method:?}")]
    InvalidMethod { method: String },

    #[error("invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("route {method} {path} is already registered")]
    Duplicate { method: String, path: String },

    #[error("router rejected {method} {path}: {reason}")]
    Rejected {
        method: String,
        path: String,
        reason: String,
    },
}

/// Route registration on top of an `axum::Router`.
#[derive(Debug)]
pub struct AxumEngine<S = ()> {
    router: Router<S>,
    table: Vec<RouteInfo>,
    policy: DuplicatePolicy,
}

impl<S> AxumEngine<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Wrap a router. Duplicates are rejected.
    pub fn new(router: Router<S>) -> Self {
        Self::with_policy(router, DuplicatePolicy::default())
    }

    pub fn with_policy(router: Router<S>, policy: DuplicatePolicy) -> Self {
        Self {
            router,
            table: Vec::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Hand the router back, with every accepted route on it.
    pub fn into_router(self) -> Router<S> {
        self.router
    }

    fn is_registered(&self, method: &str, path: &str) -> bool {
        self.table.iter().any(|r| r.method == method && r.path == path)
    }
}

impl<S> Default for AxumEngine<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(Router::new())
    }
}

impl<S> RouteRegistrar<RouteHandler> for AxumEngine<S>
where
    S: Clone + Send + Sync + 'static,
{
    type Error = RegisterError;

    fn register(&mut self, method: &str, path: &str, handler: RouteHandler) -> Result<(), RegisterError> {
        let filter = method_filter(method)?;
        validate_path(path)?;

        if self.is_registered(method, path) {
            match self.policy {
                DuplicatePolicy::Reject => {
                    return Err(RegisterError::Duplicate {
                        method: method.to_string(),
                        path: path.to_string(),
                    });
                }
                DuplicatePolicy::Ignore => {
                    tracing::warn!(method, path, "Route already registered, ignoring");
                    return Ok(());
                }
            }
        }

        let name = handler.name().to_string();
        let endpoint = on(filter, move |req: Request<Body>| handler.call(req));
        let router = self.router.clone();

        // axum panics on routes it cannot insert; keep our copy intact if it does.
        // The default panic hook still prints the panic message to stderr first.
        let routed = panic::catch_unwind(AssertUnwindSafe(move || router.route(path, endpoint)))
            .map_err(|payload| RegisterError::Rejected {
                method: method.to_string(),
                path: path.to_string(),
                reason: panic_reason(payload),
            })?;

        self.router = routed;
        self.table.push(RouteInfo::new(method, path, name));
        Ok(())
    }
}

impl<S> RouteTable for AxumEngine<S> {
    fn routes(&self) -> Vec<RouteInfo> {
        self.table.clone()
    }
}

fn method_filter(method: &str) -> Result<MethodFilter, RegisterError> {
    let invalid = || RegisterError::InvalidMethod {
        method: method.to_string(),
    };
    let parsed = Method::from_bytes(method.as_bytes()).map_err(|_| invalid())?;
    MethodFilter::try_from(parsed).map_err(|_| invalid())
}

/// Path preconditions axum enforces with a panic.
pub fn validate_path(path: &str) -> Result<(), RegisterError> {
    let invalid = |reason| RegisterError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with `/`"));
    }

    let segments: Vec<&str> = path[1..].split('/').collect();
    for (i, segment) in segments.iter().enumerate() {
        if segment.starts_with(':') {
            return Err(invalid("captures use `{name}`, not `:name`"));
        }
        if segment.starts_with('*') {
            return Err(invalid("wildcards use `{*name}`, not `*name`"));
        }
        if segment.starts_with("{*") && i + 1 != segments.len() {
            return Err(invalid("wildcard must be the last segment"));
        }
    }
    Ok(())
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown router error".to_string()
    }
}
