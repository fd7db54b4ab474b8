use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::http::server::AppState;
use crate::observability::metrics;

/// Front-end page, also served for any unmatched path.
pub async fn index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.web.template_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!(path = ?state.web.template_path, error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

/// Catalog lookup by the last segment of the path.
pub async fn get_product(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let Some(code) = path.rsplit('/').find(|segment| !segment.is_empty()) else {
        return item_not_found();
    };

    tracing::debug!(code = %code, "Product lookup");

    match state.store.product(code) {
        Some(item) => {
            tracing::debug!(code = %code, name = %item.name, price = item.price, "Product found");
            metrics::record_product_lookup(true);
            Json(item).into_response()
        }
        None => {
            tracing::debug!(code = %code, "Product not found");
            item_not_found()
        }
    }
}

/// Product lookup without a code.
pub async fn missing_product() -> Response {
    item_not_found()
}

fn item_not_found() -> Response {
    metrics::record_product_lookup(false);
    (StatusCode::NOT_FOUND, "item not found").into_response()
}

pub async fn list_sellers(State(state): State<AppState>) -> Response {
    Json(state.store.sellers()).into_response()
}

pub async fn list_plumbers(State(state): State<AppState>) -> Response {
    Json(state.store.plumbers()).into_response()
}

/// Relay the management API response.
///
/// Errors are returned to the client verbatim as plain text.
pub async fn get_manager_data(State(state): State<AppState>) -> Response {
    match state.manager.fetch_manager_data().await {
        Ok(data) => Json(data).into_response(),
        Err(e) => {
            tracing::error!(
                url = %state.manager.url(),
                error = %e,
                "Management API request failed"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
