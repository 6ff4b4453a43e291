//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! RouteBundle
//!     → engine.rs (register on axum::Router, keep route table)
//!     → server.rs (middleware, bind, serve)
//!     → request.rs (request ID on every request)
//!     → handlers.rs (built-in handlers the manifest can name)
//! ```

pub mod engine;
pub mod handlers;
pub mod request;
pub mod server;

pub use engine::{AxumEngine, RegisterError};
pub use request::X_REQUEST_ID;
pub use server::HttpServer;
