//! Shared handler references.
//!
//! A `RouteHandler` is a cheaply clonable pointer to an async function that
//! turns a request into a response. Cloning never copies the function, so a
//! descriptor copied out of a bundle still points at the same handler.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

type HandlerFn = dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync;

/// Type-erased async request handler.
#[derive(Clone)]
pub struct RouteHandler {
    name: Arc<str>,
    func: Arc<HandlerFn>,
}

impl RouteHandler {
    /// Wrap an async function. The handler is named after the function's type.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        Self::named(std::any::type_name::<F>(), f)
    }

    /// Wrap an async function under an explicit name.
    pub fn named<F, Fut, R>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + 'static,
    {
        let func = move |req: Request<Body>| -> BoxFuture<'static, Response> {
            let fut = f(req);
            Box::pin(async move { fut.await.into_response() })
        };
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Diagnostic name, reported by route tables.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the handler.
    pub fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        (self.func)(req)
    }

    /// True if both values point at the same underlying function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl PartialEq for RouteHandler {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for RouteHandler {}

impl fmt::Debug for RouteHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RouteHandler").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn teapot(_req: Request<Body>) -> StatusCode {
        StatusCode::IM_A_TEAPOT
    }

    #[test]
    fn test_clone_shares_function() {
        let h = RouteHandler::new(teapot);
        let c = h.clone();
        assert_eq!(h, c);
        assert_ne!(h, RouteHandler::new(teapot));
    }

    #[test]
    fn test_name_defaults_to_type_name() {
        let h = RouteHandler::new(teapot);
        assert!(h.name().ends_with("teapot"));
        assert_eq!(RouteHandler::named("tea", teapot).name(), "tea");
    }

    #[tokio::test]
    async fn test_call_converts_into_response() {
        let h = RouteHandler::new(teapot);
        let res = h.call(Request::new(Body::empty())).await;
        assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
    }
}
