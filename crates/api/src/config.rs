use std::path::PathBuf;

use axum::http::HeaderValue;

/// Server configuration loaded from environment variables.
///
/// Defaults reproduce the fixed deployment: port 5000 on all interfaces,
/// `database.db` and `uploads/` in the working directory.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite:database.db`).
    pub database_url: String,
    /// Directory holding uploaded incident media (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Directory holding the front end and its assets (default: `static`).
    pub static_dir: PathBuf,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `5000`                   |
    /// | `DATABASE_URL`         | `sqlite:database.db`     |
    /// | `UPLOAD_DIR`           | `uploads`                |
    /// | `STATIC_DIR`           | `static`                 |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    ///
    /// Panics on an unparsable port, timeout or origin; misconfiguration
    /// should stop the process before it binds.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:database.db".into());

        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "uploads".into())
            .into();

        let static_dir = std::env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".into())
            .into();

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            database_url,
            upload_dir,
            static_dir,
            cors_origins,
            request_timeout_secs,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect()
}
