//! Engine seams.
//!
//! Bundle application depends only on these traits, never on a concrete
//! routing engine.

use crate::routing::descriptor::RouteInfo;

/// Something routes can be registered on.
pub trait RouteRegistrar<H> {
    /// Error reported by the engine when it refuses a route.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register one route.
    fn register(&mut self, method: &str, path: &str, handler: H) -> Result<(), Self::Error>;
}

/// Enumerates the routes an engine currently holds, in registration order.
pub trait RouteTable {
    fn routes(&self) -> Vec<RouteInfo>;
}

impl<H, T: RouteRegistrar<H> + ?Sized> RouteRegistrar<H> for &mut T {
    type Error = T::Error;

    fn register(&mut self, method: &str, path: &str, handler: H) -> Result<(), Self::Error> {
        (**self).register(method, path, handler)
    }
}
