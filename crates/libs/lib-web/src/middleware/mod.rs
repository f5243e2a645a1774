//! # Middleware
//!
//! Axum middleware for request stamping, logging, and response mapping.
//!
//! ## Modules
//!
//! - **[`mw_req_stamp`]**: request ID and arrival-time stamping
//! - **[`mw_logging`]**: per-request and per-response log lines
//! - **[`mw_res_map`]**: terminal response observer

// region:    --- Modules
pub mod mw_logging;
pub mod mw_req_stamp;
pub mod mw_res_map;
// endregion: --- Modules

// region:    --- Re-exports
pub use mw_logging::log_requests;
pub use mw_req_stamp::{stamp_req, RequestStamp};
pub use mw_res_map::map_res;
// endregion: --- Re-exports
