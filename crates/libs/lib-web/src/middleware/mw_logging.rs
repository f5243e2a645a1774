//! # Request/Response Logging Middleware
//!
//! Emits one log line when a request enters the pipeline and one when its
//! response leaves: method, path, status, duration. Response lines are
//! levelled by status class so error traffic stands out on the console.
//! Headers are logged at debug level with sensitive values redacted.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, error, info, warn};

use crate::middleware::mw_req_stamp::RequestStamp;

/// Headers whose values are redacted from debug output.
const SENSITIVE_HEADERS: &[&str] = &["authorization", "cookie", "x-api-key"];

/// Log every request and its response.
///
/// Duration is measured from the arrival time recorded by the stamping
/// stage, falling back to this stage's own clock when no stamp is present.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    let stamp = req.extensions().get::<RequestStamp>().cloned();
    let request_id = stamp
        .as_ref()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let start = stamp.map(|s| s.time_in).unwrap_or_else(Instant::now);

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        "request received"
    );

    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(name, value)| {
            let name_lower = name.as_str().to_lowercase();
            if SENSITIVE_HEADERS.iter().any(|h| name_lower == *h) {
                (name.to_string(), "<redacted>".to_string())
            } else {
                let value = value.to_str().unwrap_or("<binary>").to_string();
                (name.to_string(), value)
            }
        })
        .collect();
    debug!(request_id = %request_id, headers = ?headers, "request headers");

    let response = next.run(req).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "{} {} -> {}",
            method,
            path,
            status.as_u16()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "{} {} -> {}",
            method,
            path,
            status.as_u16()
        );
    } else {
        info!(
            request_id = %request_id,
            status = status.as_u16(),
            duration_ms,
            "{} {} -> {}",
            method,
            path,
            status.as_u16()
        );
    }

    response
}
