//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MillConfig (validated, immutable)
//!     → routes resolved against the handler catalog at startup
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; routes cannot be re-registered on a live router
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{DuplicatePolicy, LogFormat, MillConfig, ObservabilityConfig, RouteConfig, ServerConfig};
