//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Serve static assets and the front-end page
//! - Wire up middleware (request ID, tracing)
//! - Serve over plain TCP or rustls

use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderName, routing::get, Router};
use axum_server::tls_rustls::RustlsConfig;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::{KassaConfig, WebConfig};
use crate::http::handlers;
use crate::http::request::{RequestUuid, X_REQUEST_ID};
use crate::lifecycle::shutdown;
use crate::manager::{ManagerClient, ManagerError};
use crate::store::LookupStore;

/// How long in-flight TLS connections may drain after shutdown is triggered.
const TLS_DRAIN_SECS: u64 = 10;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LookupStore>,
    pub manager: ManagerClient,
    pub web: Arc<WebConfig>,
}

/// HTTP server for the lookup service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over a loaded lookup store.
    pub fn new(config: KassaConfig, store: Arc<LookupStore>) -> Result<Self, ManagerError> {
        let manager = ManagerClient::new(&config.manager)?;

        let state = AppState {
            store,
            manager,
            web: Arc::new(config.web.clone()),
        };

        let router = Self::build_router(&config.web, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(web: &WebConfig, state: AppState) -> Router {
        let request_id = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/", get(handlers::index))
            .route("/api/product", get(handlers::missing_product))
            .route("/api/product/", get(handlers::missing_product))
            .route("/api/product/{*code}", get(handlers::get_product))
            .route("/sellers", get(handlers::list_sellers))
            .route("/plumbers", get(handlers::list_plumbers))
            .route("/api/rukovoditel", get(handlers::get_manager_data))
            .nest_service("/static", ServeDir::new(&web.static_dir))
            .fallback(handlers::index)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id.clone(), RequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(request_id)),
            )
    }

    /// The fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve plain HTTP on the given listener until shutdown is triggered.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server listening on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Serve HTTPS on the given listener until shutdown is triggered.
    pub async fn run_tls(
        self,
        listener: TcpListener,
        tls: RustlsConfig,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let handle = axum_server::Handle::new();

        let drain = handle.clone();
        tokio::spawn(async move {
            shutdown::wait(shutdown).await;
            drain.graceful_shutdown(Some(Duration::from_secs(TLS_DRAIN_SECS)));
        });

        tracing::info!(address = %addr, "Server listening on https://{}", addr);

        axum_server::from_tcp_rustls(listener.into_std()?, tls)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }
}
