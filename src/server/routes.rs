use crate::data::DatasetCache;
use crate::server::api::{self, ApiError};
use crate::server::page;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn json(body: String) -> Self {
        HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body,
        }
    }
}

/// Dispatch one request. Pure with respect to the transport: the axum server and
/// the tests both go through here.
pub fn route_request(cache: &DatasetCache, method: &str, path: &str, body: &str) -> HttpResponse {
    let route = path.split('?').next().unwrap_or(path);
    match (method, route) {
        ("GET", "/") | ("GET", "/index.html") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: page::index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/filters") => api_response(api::filters_payload(cache)),
        ("GET", "/api/dashboard") => api_response(api::dashboard_get_payload(cache, path)),
        ("POST", "/api/dashboard") => api_response(api::dashboard_post_payload(cache, path, body)),
        ("GET", "/api/data/version") => api_response(api::data_version_payload(cache)),
        (_, "/api/dashboard") => error_response(405, "Method Not Allowed", "Use GET or POST"),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn api_response(result: Result<String, ApiError>) -> HttpResponse {
    match result {
        Ok(payload) => HttpResponse::json(payload),
        Err(ApiError::Request(err)) => {
            tracing::warn!(error = %err, "rejected dashboard request");
            error_response(400, "Bad Request", &err.to_string())
        }
        Err(ApiError::Unavailable(message)) => {
            error_response(503, "Service Unavailable", &message)
        }
        Err(err @ ApiError::Serialize(_)) => {
            tracing::error!(error = %err, "response serialization failed");
            error_response(500, "Internal Server Error", &err.to_string())
        }
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
