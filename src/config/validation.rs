//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and addresses
//! - Check manifest entries are complete
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Method and path syntax are left to the routing engine
//! - Pure function: MillConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::MillConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: {value:?} is not a socket address")]
    BadAddress { field: &'static str, value: String },

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("routes[{index}]: {field} must not be empty")]
    EmptyRouteField { index: usize, field: &'static str },
}

pub fn validate_config(config: &MillConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BadAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }

    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::BadAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    for (index, route) in config.routes.iter().enumerate() {
        for (field, value) in [
            ("method", &route.method),
            ("path", &route.path),
            ("handler", &route.handler),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::EmptyRouteField { index, field });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&MillConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = MillConfig::default();
        config.server.bind_address = "nowhere".into();
        config.server.request_timeout_secs = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "".into();
        config.routes.push(RouteConfig {
            method: "GET".into(),
            path: "".into(),
            handler: " ".into(),
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::EmptyRouteField { index: 0, field: "path" }));
        assert!(errors.contains(&ValidationError::EmptyRouteField { index: 0, field: "handler" }));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = MillConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());
    }
}
