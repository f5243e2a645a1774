//! # HTTP Request Handlers
//!
//! Axum request handlers. The service exposes a single routed endpoint:
//!
//! - **[`health`]**: `GET /health` - liveness and database connectivity
//!
//! Every other path falls through to the catch-all stage in
//! [`crate::server`], which reports it as a 404 error.

pub mod health;
