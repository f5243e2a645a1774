//! # Server Setup
//!
//! Router assembly, middleware stack, and HTTP server startup.
//!
//! The request pipeline, outermost stage first:
//!
//! 1. CORS policy (permissive unless an origin allow-list is configured)
//! 2. panic backstop mapping any panic to a 500 JSON response
//! 3. request stamping (ID plus arrival time)
//! 4. tracing span per request
//! 5. request/response logging
//! 6. response mapping (terminal observer)
//! 7. routed handlers, then a catch-all reporting unmatched routes as 404
//!
//! Failures raised anywhere in the chain are translated exactly once, by
//! the application error type's `IntoResponse` impl, so every request
//! terminates in exactly one well-formed response.

// region:    --- Imports
use crate::handlers;
use crate::middleware::{log_requests, map_res, stamp_req, RequestStamp};
use axum::extract::FromRef;
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use lib_core::{create_pool, AppError, Config, DbPool};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
// endregion: --- Imports

// region:    --- AppState

/// Application state shared across all routes.
///
/// Constructed once at startup and handed to the router; no stage reaches
/// for ambient globals. The pool is `None` when the database was
/// unreachable at startup (see [`start_server`]).
#[derive(Clone)]
pub struct AppState {
    pub db: Option<DbPool>,
    pub config: Config,
}

impl FromRef<AppState> for Option<DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
// endregion: --- AppState

// region:    --- Server Configuration

/// Server configuration supplied by the binary entry point.
#[derive(Debug, Default)]
pub struct ServerConfig {
    /// Bind address override. When `None`, the listener binds
    /// `0.0.0.0:{port}` using the configured port.
    pub bind_address: Option<String>,

    /// CORS origin allow-list. Empty means permissive.
    pub allowed_origins: Vec<String>,
}
// endregion: --- Server Configuration

// region:    --- Server Setup

/// Initialize and start the HTTP server.
///
/// Loads and validates configuration, attempts the database connection,
/// assembles the router, and serves until the process is stopped.
///
/// A failed database connection is logged but does not halt startup; the
/// listener still accepts traffic and `/health` reports the degraded
/// state. Configuration errors and bind failures do halt startup.
pub async fn start_server(server_config: ServerConfig) -> anyhow::Result<()> {
    init_tracing();

    dotenvy::dotenv().ok();

    info!("loading configuration");
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    info!(database_url = %config.database_url, "connecting to database");
    let db = match create_pool(&config).await {
        Ok(pool) => {
            info!("database connected");
            Some(pool)
        }
        Err(err) => {
            error!(error = %err, "database connection failed, serving with degraded health");
            None
        }
    };

    let bind_address = server_config
        .bind_address
        .clone()
        .unwrap_or_else(|| format!("0.0.0.0:{}", config.port));

    let state = AppState { db, config };
    let app = create_router(state, server_config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!(%bind_address, "server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with the full middleware pipeline.
pub fn create_router(state: AppState, allowed_origins: Vec<String>) -> Router {
    with_pipeline(base_routes(), state, allowed_origins)
}

fn base_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .fallback(invalid_route)
}

fn with_pipeline(routes: Router<AppState>, state: AppState, allowed_origins: Vec<String>) -> Router {
    let cors = if allowed_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    };

    routes
        .with_state(state)
        // Layer order is inside-out: the last layer runs first, so the
        // stamp is in place before the span, logging, and handlers see
        // the request.
        .layer(axum::middleware::from_fn(map_res))
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .extensions()
                    .get::<RequestStamp>()
                    .map(|s| s.id.clone())
                    .unwrap_or_else(|| "unknown".to_string());
                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

/// Catch-all stage: raise a not-found error for any unmatched route.
///
/// Matches every method and every path no earlier stage claimed. It never
/// writes a response itself; the error value carries the 404 downstream
/// to the terminal translation.
async fn invalid_route() -> lib_core::Result<()> {
    Err(AppError::NotFound("invalid route".to_string()))
}

/// Panic backstop: translate a panicking stage into a 500 response.
///
/// The panic payload is logged server-side only; the client receives the
/// generic internal-error envelope.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %detail, "request handler panicked");

    AppError::Internal("An internal error occurred".to_string()).into_response()
}

fn init_tracing() {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
// endregion: --- Server Setup
