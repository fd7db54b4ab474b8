//! Shared utilities for integration testing.

use std::fs;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Json, Router};
use kassa::config::KassaConfig;
use kassa::http::HttpServer;
use kassa::lifecycle::Shutdown;
use kassa::store::LookupStore;
use serde_json::Value;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const GOODS: &str = "code;article;groupCode;isGroup;name;price\n\
A1;ART1;G1;1;Widget;9.99\n\
B2;ART3;G1;0;Mixer tap;2499.90\n\
A1;ART2;G2;0;Gadget;abc\n";

pub const SELLERS: &str = "code;name\n\
3;Sidorova\n\
1;Ivanova\n\
2;Kuznetsova\n";

pub const PLUMBERS: &str = "code;name\n\
10;Petrov\n\
11;Alekseev\n";

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>kassa</body></html>";

/// A running service bound to an ephemeral port.
///
/// Dropping it stops the server.
pub struct TestService {
    pub addr: SocketAddr,
    _shutdown: Shutdown,
    _dir: TempDir,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Write the lookup files, page and static assets into `dir` and point a config at them.
pub fn fixture_config(dir: &TempDir) -> KassaConfig {
    let root = dir.path();
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::create_dir_all(root.join("static/css")).unwrap();
    fs::write(root.join("goods_briefly.csv"), GOODS).unwrap();
    fs::write(root.join("sellers.csv"), SELLERS).unwrap();
    fs::write(root.join("plumbers.csv"), PLUMBERS).unwrap();
    fs::write(root.join("templates/index.html"), INDEX_HTML).unwrap();
    fs::write(root.join("static/css/app.css"), "body { margin: 0; }").unwrap();

    let mut config = KassaConfig::default();
    config.listener.https = false;
    config.listener.http_address = "127.0.0.1:0".into();
    config.data.catalog_path = root.join("goods_briefly.csv");
    config.data.sellers_path = root.join("sellers.csv");
    config.data.plumbers_path = root.join("plumbers.csv");
    config.web.template_path = root.join("templates/index.html");
    config.web.static_dir = root.join("static");
    config
}

/// Start the service over the fixture files, letting `customize` adjust the config.
pub async fn start_service(customize: impl FnOnce(&mut KassaConfig)) -> TestService {
    let dir = TempDir::new().unwrap();
    let mut config = fixture_config(&dir);
    customize(&mut config);

    let store = Arc::new(LookupStore::load(&config.data).unwrap());
    let server = HttpServer::new(config, store).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService {
        addr,
        _shutdown: shutdown,
        _dir: dir,
    }
}

/// Start a programmable management API mock. Returns its endpoint URL.
///
/// `f` receives the posted JSON body and returns the status and raw body to send.
pub async fn start_mock_manager<F, Fut>(f: F) -> String
where
    F: Fn(Value) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().route(
        "/api/rest.php",
        post(move |Json(body): Json<Value>| {
            let f = f.clone();
            async move {
                let (status, body) = f(body).await;
                (StatusCode::from_u16(status).unwrap(), body)
            }
        }),
    );

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}/api/rest.php", addr)
}

/// Client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
