//! Configuration schema definitions.
//!
//! Every field has a default, so the service starts with no config file at all.
//! All types derive Serde traits for deserialization from TOML.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct KassaConfig {
    /// Listener configuration (transport, addresses, TLS).
    pub listener: ListenerConfig,

    /// Lookup table sources.
    pub data: DataConfig,

    /// Front-end page and static assets.
    pub web: WebConfig,

    /// Management API client settings.
    pub manager: ManagerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Serve HTTPS (true) or plain HTTP (false).
    pub https: bool,

    /// Bind address for plain HTTP.
    pub http_address: String,

    /// Bind address for HTTPS.
    pub https_address: String,

    /// Certificate and key used when `https` is set.
    pub tls: TlsConfig,
}

impl ListenerConfig {
    /// The bind address for the selected transport.
    pub fn bind_address(&self) -> &str {
        if self.https {
            &self.https_address
        } else {
            &self.http_address
        }
    }

    /// URL scheme for the selected transport.
    pub fn scheme(&self) -> &'static str {
        if self.https {
            "https"
        } else {
            "http"
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            https: true,
            http_address: "0.0.0.0:8080".to_string(),
            https_address: "0.0.0.0:8443".to_string(),
            tls: TlsConfig::default(),
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TlsConfig {
    /// Path to certificate chain (PEM).
    pub cert_path: PathBuf,

    /// Path to private key (PEM).
    pub key_path: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            cert_path: PathBuf::from("server.crt"),
            key_path: PathBuf::from("server.key"),
        }
    }
}

/// Locations of the lookup files read at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Goods catalog (`code;article;groupCode;isGroup;name;price`).
    pub catalog_path: PathBuf,

    /// Sellers roster (`code;name`).
    pub sellers_path: PathBuf,

    /// Plumbers roster (`code;name`).
    pub plumbers_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("../goods_briefly.csv"),
            sellers_path: PathBuf::from("../sellers.csv"),
            plumbers_path: PathBuf::from("../plumbers.csv"),
        }
    }
}

/// Front-end assets.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WebConfig {
    /// HTML page served at `/`.
    pub template_path: PathBuf,

    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("templates/index.html"),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Management API (Rukovoditel) request settings.
///
/// The credentials are sent in the request body, not in headers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// REST endpoint URL.
    pub url: String,

    /// Overall request timeout in seconds.
    pub timeout_secs: u64,

    /// API key.
    pub key: String,

    pub username: String,

    pub password: String,

    /// API action, e.g. `select`.
    pub action: String,

    /// Entity to query.
    pub entity_id: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            url: "https://rukovoditel.cloud/demo/3.5/api/rest.php?demo_id=3485".to_string(),
            timeout_secs: 10,
            key: "5rBkQICAed7fdJvmE6u0uOjsGMhNArmMLPqAxWrn".to_string(),
            username: "admin".to_string(),
            password: "admin".to_string(),
            action: "select".to_string(),
            entity_id: 25,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
