//! Applying route bundles to an engine.

use crate::observability::metrics;
use crate::routing::{RouteBundle, RouteInfo, RouteRegistrar, RouteTable};

/// A routing engine paired with the ability to apply bundles to it.
///
/// The engine is fixed at construction; `Server` never swaps it out.
#[derive(Debug)]
pub struct Server<E> {
    engine: E,
}

impl<E> Server<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Register every route of `bundle`, in order.
    ///
    /// Pure pass-through: the first error the engine reports stops the loop
    /// and is returned as is. Routes registered before it stay registered.
    /// Applying the same bundle twice registers everything twice; what that
    /// means is up to the engine.
    pub fn with<H>(&mut self, bundle: &RouteBundle<H>) -> Result<&mut Self, <E as RouteRegistrar<H>>::Error>
    where
        E: RouteRegistrar<H>,
        H: Clone,
    {
        for route in bundle {
            tracing::debug!(method = route.method(), path = route.path(), "Registering route");

            match self.engine.register(route.method(), route.path(), route.handler().clone()) {
                Ok(()) => metrics::record_registration(route.method(), "ok"),
                Err(e) => {
                    tracing::error!(
                        method = route.method(),
                        path = route.path(),
                        error = %e,
                        "Route registration failed"
                    );
                    metrics::record_registration(route.method(), "error");
                    return Err(e);
                }
            }
        }

        tracing::info!(routes = bundle.len(), "Route bundle applied");
        Ok(self)
    }
}

impl<E: RouteTable> Server<E> {
    /// Routes the engine currently holds.
    pub fn routes(&self) -> Vec<RouteInfo> {
        self.engine.routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteDescriptor;
    use proptest::prelude::*;
    use std::convert::Infallible;

    /// Engine double that accepts everything, duplicates included.
    #[derive(Debug, Default)]
    struct Recorder {
        seen: Vec<(String, String, u32)>,
    }

    impl RouteRegistrar<u32> for Recorder {
        type Error = Infallible;

        fn register(&mut self, method: &str, path: &str, handler: u32) -> Result<(), Infallible> {
            self.seen.push((method.into(), path.into(), handler));
            Ok(())
        }
    }

    /// Engine double that refuses one path.
    #[derive(Debug, thiserror::Error)]
    #[error("refused {0}")]
    struct Refused(String);

    #[derive(Debug, Default)]
    struct Picky {
        seen: Vec<String>,
    }

    impl RouteRegistrar<u32> for Picky {
        type Error = Refused;

        fn register(&mut self, _method: &str, path: &str, _handler: u32) -> Result<(), Refused> {
            if path == "/bad" {
                return Err(Refused(path.into()));
            }
            self.seen.push(path.into());
            Ok(())
        }
    }

    fn bundle() -> RouteBundle<u32> {
        RouteBundle::new(vec![
            RouteDescriptor::new("GET", "/a", 1),
            RouteDescriptor::new("POST", "/b", 2),
        ])
    }

    #[test]
    fn test_with_registers_in_order() {
        let mut server = Server::new(Recorder::default());
        server.with(&bundle()).unwrap();
        assert_eq!(
            server.engine().seen,
            vec![("GET".into(), "/a".into(), 1), ("POST".into(), "/b".into(), 2)]
        );
    }

    #[test]
    fn test_with_empty_bundle() {
        let mut server = Server::new(Recorder::default());
        server.with(&RouteBundle::default()).unwrap();
        assert!(server.engine().seen.is_empty());
    }

    #[test]
    fn test_with_twice_passes_duplicates_through() {
        let mut server = Server::new(Recorder::default());
        server.with(&bundle()).unwrap().with(&bundle()).unwrap();
        assert_eq!(server.engine().seen.len(), 4);
        assert_eq!(server.engine().seen[0], server.engine().seen[2]);
    }

    #[test]
    fn test_with_stops_at_first_error() {
        let bundle = RouteBundle::new(vec![
            RouteDescriptor::new("GET", "/ok", 1),
            RouteDescriptor::new("GET", "/bad", 2),
            RouteDescriptor::new("GET", "/never", 3),
        ]);
        let mut server = Server::new(Picky::default());

        let err = server.with(&bundle).unwrap_err();
        assert_eq!(err.to_string(), "refused /bad");
        assert_eq!(server.into_engine().seen, vec!["/ok".to_string()]);
    }

    #[test]
    fn test_engine_by_reference() {
        let mut recorder = Recorder::default();
        Server::new(&mut recorder).with(&bundle()).unwrap();
        assert_eq!(recorder.seen.len(), 2);
    }

    proptest! {
        /// Property: the engine sees every descriptor once, in bundle order.
        #[test]
        fn with_keeps_order_and_length(
            raw in prop::collection::vec(("[A-Z]{1,7}", "/[a-z0-9/]{0,12}", any::<u32>()), 0..16)
        ) {
            let bundle: RouteBundle<u32> = raw
                .iter()
                .map(|(m, p, h)| RouteDescriptor::new(m.as_str(), p.as_str(), *h))
                .collect();
            let mut server = Server::new(Recorder::default());

            server.with(&bundle).unwrap();

            prop_assert_eq!(server.engine().seen.len(), bundle.len());
            prop_assert_eq!(&server.engine().seen, &raw);
        }
    }
}

