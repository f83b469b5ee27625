/// Server configuration loaded from environment variables.
///
/// Everything except `LABELS` has a default suitable for local development.
/// All values are fixed for the process lifetime once loaded.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long a request waits for a pooled database connection (default: `10`).
    pub db_acquire_timeout_secs: u64,
    /// Rows per rendered page (default: `50`).
    pub page_size: i64,
    /// Ordered annotation labels, parsed from comma-separated `LABELS`.
    /// Required; there is no sensible default label vocabulary.
    pub labels: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `10`                    |
    /// | `PAGE_SIZE`               | `50`                    |
    /// | `LABELS`                  | (required)              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64");

        let page_size: i64 = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "50".into())
            .parse()
            .expect("PAGE_SIZE must be a valid positive integer");
        assert!(page_size > 0, "PAGE_SIZE must be at least 1");

        let labels: Vec<String> = std::env::var("LABELS")
            .expect("LABELS must be set (comma-separated label names)")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_acquire_timeout_secs,
            page_size,
            labels,
        }
    }
}
