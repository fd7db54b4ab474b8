//! Management API client with a hard request timeout.

use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::ManagerConfig;
use crate::observability::metrics;

/// Errors that can occur while querying the management API.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(reqwest::Error),

    /// The request did not complete within the timeout.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection, send or body read failed.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    /// The body is not a JSON object.
    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Body of the fixed query sent to the management API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerRequest {
    pub key: String,
    pub username: String,
    pub password: String,
    pub action: String,
    pub entity_id: u64,
}

impl From<&ManagerConfig> for ManagerRequest {
    fn from(config: &ManagerConfig) -> Self {
        Self {
            key: config.key.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            action: config.action.clone(),
            entity_id: config.entity_id,
        }
    }
}

/// Client for the management API.
#[derive(Debug, Clone)]
pub struct ManagerClient {
    http: reqwest::Client,
    url: String,
    request: ManagerRequest,
    timeout_secs: u64,
}

impl ManagerClient {
    /// Create a client from configuration.
    pub fn new(config: &ManagerConfig) -> Result<Self, ManagerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ManagerError::Client)?;

        Ok(Self {
            http,
            url: config.url.clone(),
            request: ManagerRequest::from(config),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send the fixed query and return the decoded JSON object.
    pub async fn fetch_manager_data(&self) -> Result<Map<String, Value>, ManagerError> {
        let start = Instant::now();
        let result = self.send().await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(ManagerError::Timeout(_)) => "timeout",
            Err(ManagerError::Decode(_)) => "invalid_response",
            Err(_) => "error",
        };
        metrics::record_manager_request(outcome, start);

        result
    }

    async fn send(&self) -> Result<Map<String, Value>, ManagerError> {
        let response = self
            .http
            .post(&self.url)
            .json(&self.request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        tracing::info!(url = %self.url, status = %status, body = %body, "Management API response");

        let object: Map<String, Value> = serde_json::from_str(&body)?;
        Ok(object)
    }

    fn transport_error(&self, e: reqwest::Error) -> ManagerError {
        if e.is_timeout() {
            ManagerError::Timeout(self.timeout_secs)
        } else {
            ManagerError::Transport(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_from_config() {
        let config = ManagerConfig::default();
        let body = serde_json::to_value(ManagerRequest::from(&config)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "key": "5rBkQICAed7fdJvmE6u0uOjsGMhNArmMLPqAxWrn",
                "username": "admin",
                "password": "admin",
                "action": "select",
                "entity_id": 25,
            })
        );
    }

    #[test]
    fn test_non_object_body_is_decode_error() {
        let err = serde_json::from_str::<Map<String, Value>>("[1, 2, 3]").unwrap_err();
        let err = ManagerError::from(err);
        assert!(err.to_string().starts_with("invalid JSON response"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ManagerConfig {
            url: format!("http://{}/api/rest.php", addr),
            timeout_secs: 2,
            ..ManagerConfig::default()
        };
        let client = ManagerClient::new(&config).unwrap();

        let err = client.fetch_manager_data().await.unwrap_err();
        assert!(matches!(err, ManagerError::Transport(_) | ManagerError::Timeout(_)));
        assert!(!err.to_string().is_empty());
    }
}
