//! Request logging middleware for the HTTP server
//!
//! Emits one structured line per request with method, path, status and
//! latency.

use axum::{extract::Request, http::Method, middleware::Next, response::Response};
use std::time::{Duration, Instant};

/// Request logging middleware
///
/// Logs requests in the format `[POST /tasks] [201] [3 ms]`, at warn level
/// for server errors and info level otherwise.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let elapsed = start_time.elapsed();
    let status = response.status();
    let line = format_request_line(&method, &path, status.as_u16(), elapsed);

    if status.is_server_error() {
        tracing::warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = elapsed.as_millis() as u64,
            "{line}"
        );
    } else {
        tracing::info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms = elapsed.as_millis() as u64,
            "{line}"
        );
    }

    response
}

/// Format a single request summary line
fn format_request_line(method: &Method, path: &str, status: u16, elapsed: Duration) -> String {
    format!("[{method} {path}] [{status}] [{} ms]", elapsed.as_millis())
}
