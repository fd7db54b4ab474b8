//! TCP listener binding.

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured address is not a socket address.
    #[error("invalid bind address '{address}': {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a configured bind address.
pub fn parse_address(address: &str) -> Result<SocketAddr, ListenerError> {
    address.parse().map_err(|source| ListenerError::Address {
        address: address.to_string(),
        source,
    })
}

/// Bind a plain TCP listener on the configured address.
pub async fn bind(address: &str) -> Result<TcpListener, ListenerError> {
    let addr = parse_address(address)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { address: addr, source })?;

    tracing::info!(address = %addr, "Listener bound");
    Ok(listener)
}
