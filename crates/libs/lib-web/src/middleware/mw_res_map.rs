//! # Response Mapping Middleware
//!
//! Terminal observer of the pipeline. Error *translation* itself is carried
//! by the application error type's `IntoResponse` impl, so by the time a
//! response reaches this stage every failure has already been serialized
//! into the JSON error envelope. This stage records server-error outcomes
//! with their request ID; it never rewrites the response.

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::error;

use crate::middleware::mw_req_stamp::RequestStamp;

/// Observe the final response for a request.
pub async fn map_res(req: Request, next: Next) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone());

    let res = next.run(req).await;

    if res.status().is_server_error() {
        error!(
            request_id = ?request_id,
            status = res.status().as_u16(),
            "server error response"
        );
    }

    res
}
