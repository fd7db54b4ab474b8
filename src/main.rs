//! Point-of-sale lookup service.
//!
//! Loads the goods catalog and staff rosters at startup, serves them as JSON,
//! serves the front-end, and relays one query to the management API.
//!
//! ```text
//!   goods_briefly.csv ─┐
//!   sellers.csv ───────┼─▶ LookupStore ─▶ /api/product/{code}, /sellers, /plumbers
//!   plumbers.csv ──────┘
//!
//!   /api/rukovoditel ─▶ ManagerClient ─▶ management REST API
//!   /, /static/*     ─▶ templates/, static/
//! ```

use std::path::PathBuf;

use clap::Parser;

use kassa::config::loader::load_or_default;
use kassa::lifecycle::{signals, startup, Shutdown};
use kassa::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "kassa")]
#[command(about = "Point-of-sale lookup service", long_about = None)]
struct Cli {
    /// Serve HTTPS on :8443 (true) or plain HTTP on :8080 (false)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    https: Option<bool>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_or_default(cli.config.as_deref())?;
    if let Some(https) = cli.https {
        config.listener.https = https;
    }

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        scheme = config.listener.scheme(),
        bind_address = %config.listener.bind_address(),
        catalog = ?config.data.catalog_path,
        manager_url = %config.manager.url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    if let Err(e) = startup::run(config, &shutdown).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
