//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup. Reads the
//! CORS allow-list from the environment; everything else (port, database)
//! is resolved by the server's own configuration loading.

use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Comma-separated origin allow-list; unset or empty means permissive.
    let allowed_origins: Vec<String> = std::env::var("ALLOWED_ORIGINS")
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let config = ServerConfig {
        allowed_origins,
        ..Default::default()
    };

    start_server(config).await
}
