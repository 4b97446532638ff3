/// Which record store backend the server talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// PostgreSQL reached through a `sqlx` pool.
    Postgres { database_url: String },
    /// Hosted PostgREST-style service.
    Rest { url: String, api_key: String },
    /// Process-local store; data is lost on restart.
    Memory,
}

impl StoreConfig {
    /// Load the backend selection from environment variables.
    ///
    /// | Env Var         | Used when                     |
    /// |-----------------|-------------------------------|
    /// | `STORE_BACKEND` | always (default: `postgres`)  |
    /// | `DATABASE_URL`  | `postgres`                    |
    /// | `STORE_URL`     | `rest`                        |
    /// | `STORE_API_KEY` | `rest`                        |
    pub fn from_env() -> Self {
        let backend = std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".into());

        match backend.trim().to_ascii_lowercase().as_str() {
            "postgres" => Self::Postgres {
                database_url: std::env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORE_BACKEND=postgres"),
            },
            "rest" => Self::Rest {
                url: std::env::var("STORE_URL")
                    .expect("STORE_URL must be set when STORE_BACKEND=rest"),
                api_key: std::env::var("STORE_API_KEY")
                    .expect("STORE_API_KEY must be set when STORE_BACKEND=rest"),
            },
            "memory" => Self::Memory,
            other => panic!("Unknown STORE_BACKEND '{other}' (expected postgres, rest or memory)"),
        }
    }

    /// Short backend name for logging.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Rest { .. } => "rest",
            Self::Memory => "memory",
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields except the store credentials have defaults suitable for
/// local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Record store backend.
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Panics on unparsable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store: StoreConfig::from_env(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
