use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::http::{header, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::DashboardConfig;
use crate::data::DatasetCache;

pub mod api;
pub mod page;
pub mod routes;

use routes::HttpResponse;

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// Every request goes through [`routes::route_request`]; axum only supplies transport.
pub fn router(cache: Arc<DatasetCache>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(cache)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(cache): State<Arc<DatasetCache>>,
    method: Method,
    uri: Uri,
    body: String,
) -> HttpResponse {
    let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    let response = routes::route_request(&cache, method.as_str(), path, &body);
    if response.status_code >= 400 {
        tracing::debug!(
            %method,
            path,
            status = response.status_code,
            reason = response.status_text,
            "request not served"
        );
    }
    response
}

pub async fn serve(config: &DashboardConfig, cache: Arc<DatasetCache>) -> std::io::Result<()> {
    // Load at startup so the first page view does not pay for it. A failure is
    // kept in the cache and reported to every client.
    match cache.get() {
        Ok(loaded) => tracing::info!(rows = loaded.table.len(), "dataset ready"),
        Err(err) => tracing::error!(error = %err, "serving without a dataset"),
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        "salary insights dashboard listening on http://{}",
        listener.local_addr()?
    );
    axum::serve(listener, router(cache)).await
}

pub fn run_server(config: &DashboardConfig, cache: Arc<DatasetCache>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime
        .block_on(serve(config, cache))
        .with_context(|| format!("dashboard server on {} failed", config.bind_addr))
}
