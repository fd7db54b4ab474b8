//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the lookup store before anything binds
//! - Build the HTTP server
//! - Load TLS material when HTTPS is selected
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently

use std::sync::Arc;

use crate::config::KassaConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;
use crate::net::{listener, tls};
use crate::store::LookupStore;

/// Start the service and serve until `shutdown` fires.
pub async fn run(
    config: KassaConfig,
    shutdown: &Shutdown,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = Arc::new(LookupStore::load(&config.data)?);

    let https = config.listener.https;
    let address = config.listener.bind_address().to_string();
    let tls_paths = config.listener.tls.clone();

    let server = HttpServer::new(config, store)?;

    if https {
        let tls = tls::load_tls_config(&tls_paths.cert_path, &tls_paths.key_path).await?;
        let listener = listener::bind(&address).await?;
        server.run_tls(listener, tls, shutdown.subscribe()).await?;
    } else {
        let listener = listener::bind(&address).await?;
        server.run(listener, shutdown.subscribe()).await?;
    }

    Ok(())
}
