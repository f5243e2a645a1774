//! # Application Configuration
//!
//! Configuration is loaded from environment variables once at startup and
//! validated before the listener is started, so a misconfigured process
//! fails fast. The resulting [`Config`] is carried in the application state
//! rather than held in a global.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// TCP port the HTTP listener binds to.
    pub port: u16,

    /// SQLite database connection URL.
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `PORT` defaults to 5000 and `DATABASE_URL` to a local SQLite file,
    /// so the service runs with no environment at all.
    pub fn from_env() -> Result<Self, String> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|e| format!("PORT must be a valid port number: {e}"))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/api.db".to_string());

        Ok(Self { port, database_url })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.database_url.is_empty() {
            return Err("DATABASE_URL must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        let config = Config {
            port: 5000,
            database_url: "sqlite:data/api.db".to_string(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_port_zero() {
        let config = Config {
            port: 0,
            database_url: "sqlite:data/api.db".to_string(),
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_database_url() {
        let config = Config {
            port: 5000,
            database_url: String::new(),
        };

        assert!(config.validate().is_err());
    }
}
