//! Register predefined route bundles on an axum router.
//!
//! ```no_run
//! use axum::{body::Body, http::Request, Router};
//! use routemill::{AxumEngine, RouteBundle, RouteDescriptor, RouteHandler, Server};
//!
//! async fn hello(_req: Request<Body>) -> &'static str {
//!     "hello"
//! }
//!
//! let bundle = RouteBundle::new(vec![
//!     RouteDescriptor::new("GET", "/hello", RouteHandler::new(hello)),
//! ]);
//!
//! let mut server = Server::new(AxumEngine::new(Router::new()));
//! server.with(&bundle).expect("routes registered");
//! let router: Router = server.into_engine().into_router();
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod server;

pub use config::MillConfig;
pub use http::{AxumEngine, HttpServer, RegisterError};
pub use lifecycle::Shutdown;
pub use routing::{RouteBundle, RouteDescriptor, RouteHandler, RouteInfo, RouteRegistrar, RouteTable};
pub use server::Server;
