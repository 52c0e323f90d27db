use std::str::FromStr;
use std::time::Duration;

use catalog_db::PoolConfig;

/// Startup configuration errors. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string. Required.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Seconds to wait for a pooled connection (default: `5`).
    pub db_acquire_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `DATABASE_URL`            | required                   |
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `DB_MAX_CONNECTIONS`      | `10`                       |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`                        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port: parse_or(&lookup, "PORT", 3000)?,
            database_url,
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            db_acquire_timeout_secs: parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?,
        })
    }

    /// Pool sizing derived from the `DB_*` settings.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| map.get(key).cloned())
    }

    #[test]
    fn missing_database_url_is_fatal() {
        assert_matches!(load(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn blank_database_url_is_fatal() {
        assert_matches!(
            load(&[("DATABASE_URL", "  ")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/catalog")]).unwrap();

        assert_eq!(config.database_url, "postgres://localhost/catalog");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.db_acquire_timeout_secs, 5);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("DATABASE_URL", "postgres://db/catalog"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "1"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.request_timeout_secs, 5);

        let pool = config.pool_config();
        assert_eq!(pool.max_connections, 2);
        assert_eq!(pool.acquire_timeout, Duration::from_secs(1));
    }

    #[test]
    fn invalid_port_is_reported_with_its_value() {
        assert_matches!(
            load(&[("DATABASE_URL", "postgres://db/x"), ("PORT", "eighty")]),
            Err(ConfigError::Invalid { key: "PORT", value }) if value == "eighty"
        );
    }
}
