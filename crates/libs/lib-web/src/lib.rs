//! # Web Library
//!
//! HTTP handlers, middleware, and server assembly for the API service.

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::{start_server, AppState, ServerConfig};
