//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::KassaConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("manager.url: '{value}' is not an http(s) URL")]
    InvalidUrl { value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} must not be empty")]
    EmptyPath { field: &'static str },
}

/// Check a parsed configuration for semantic errors.
pub fn validate_config(config: &KassaConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.http_address", &config.listener.http_address);
    check_address(&mut errors, "listener.https_address", &config.listener.https_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    match url::Url::parse(&config.manager.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::InvalidUrl {
            value: config.manager.url.clone(),
        }),
    }

    if config.manager.timeout_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "manager.timeout_secs",
        });
    }

    let paths: [(&'static str, &Path); 5] = [
        ("data.catalog_path", config.data.catalog_path.as_path()),
        ("data.sellers_path", config.data.sellers_path.as_path()),
        ("data.plumbers_path", config.data.plumbers_path.as_path()),
        ("web.template_path", config.web.template_path.as_path()),
        ("web.static_dir", config.web.static_dir.as_path()),
    ];
    for (field, path) in paths {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyPath { field });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
