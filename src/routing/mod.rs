//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route manifest (config) or hand-built descriptors
//!     → catalog.rs (resolve handler names)
//!     → bundle.rs (freeze as immutable RouteBundle)
//!     → Server::with (one register() call per descriptor)
//!     → registrar.rs seam → engine (axum adapter in http/engine.rs)
//! ```
//!
//! # Design Decisions
//! - Bundles are immutable; readers get copies
//! - Handlers are shared references, never deep-copied
//! - Registration order is bundle order
//! - The engine alone decides what a bad or repeated route means

pub mod bundle;
pub mod catalog;
pub mod descriptor;
pub mod handler;
pub mod registrar;

pub use bundle::RouteBundle;
pub use catalog::{CatalogError, HandlerCatalog};
pub use descriptor::{RouteDescriptor, RouteInfo};
pub use handler::RouteHandler;
pub use registrar::{RouteRegistrar, RouteTable};
