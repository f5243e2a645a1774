//! # Request Stamping Middleware
//!
//! Attaches a [`RequestStamp`] (unique ID plus arrival time) to every request
//! before any other stage inspects it. The ID is echoed back on the response
//! as `X-Request-ID` so client reports can be correlated with server logs,
//! and the arrival time lets the logging stage compute request duration.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

/// Per-request metadata shared with later pipeline stages via extensions.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier.
    pub id: String,
    /// Arrival time of the request.
    pub time_in: Instant,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            time_in: Instant::now(),
        }
    }
}

/// Stamp the request and echo the ID on the response.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert("X-Request-ID", value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamps_are_unique() {
        let a = RequestStamp::new();
        let b = RequestStamp::new();

        assert_ne!(a.id, b.id);
    }
}
