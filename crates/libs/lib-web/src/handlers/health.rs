//! Health endpoint.
//!
//! Reports process liveness and whether the database connection established
//! at startup is still usable. A failed startup connection does not block
//! traffic, so this endpoint is how operators observe the degraded state.

use axum::{extract::State, Json};
use lib_core::{DbPool, Result};
use serde::Serialize;

/// Health report returned by `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Health handler.
///
/// Always returns 200; a broken database is reported in the body rather
/// than as a request failure, since the process itself is still serving.
pub async fn health(State(db): State<Option<DbPool>>) -> Json<HealthResponse> {
    let database_ok = match &db {
        Some(pool) => ping(pool).await.is_ok(),
        None => false,
    };

    let response = if database_ok {
        HealthResponse {
            status: "ok",
            database: "connected",
        }
    } else {
        HealthResponse {
            status: "degraded",
            database: "unavailable",
        }
    };

    Json(response)
}

async fn ping(pool: &DbPool) -> Result<()> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
