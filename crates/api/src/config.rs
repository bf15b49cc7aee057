use std::str::FromStr;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// SQLite connection URL.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `5000`                             |
    /// | `CORS_ORIGINS`         | `*`                                |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                               |
    /// | `DATABASE_URL`         | `sqlite://orderdesk.db?mode=rwc`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", "5000")?;

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", "30")?;
        let database_url = env_or("DATABASE_URL", "sqlite://orderdesk.db?mode=rwc");

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
        })
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_env<T: FromStr>(var: &'static str, default: &str) -> Result<T, ConfigError> {
    let value = env_or(var, default);
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
