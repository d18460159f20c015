/// Where the startup content fetch comes from.
#[derive(Debug, Clone)]
pub enum ContentBackendConfig {
    /// The real delivery API.
    Delivery {
        api_url: String,
        space_id: String,
        access_token: String,
    },
    /// The built-in demo fixture (local development, no backend needed).
    Fixture,
}

/// Server configuration loaded from environment variables.
///
/// Bind/CORS/timeout fields have defaults suitable for local development.
/// The content backend has none: the server refuses to start without either
/// delivery credentials or an explicit `CONTENT_FIXTURE=1`.
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
    /// Locales to fetch at startup; the first is the default locale.
    pub locales: Vec<String>,
    /// Content backend selection.
    pub content: ContentBackendConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOCALES`              | `es,en`                    |
    /// | `CONTENT_FIXTURE`      | unset                      |
    /// | `CONTENT_API_URL`      | required unless fixture    |
    /// | `CONTENT_SPACE_ID`     | required unless fixture    |
    /// | `CONTENT_ACCESS_TOKEN` | required unless fixture    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_csv(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let locales = parse_csv(&std::env::var("LOCALES").unwrap_or_else(|_| "es,en".into()));
        assert!(!locales.is_empty(), "LOCALES must name at least one locale");

        let fixture = std::env::var("CONTENT_FIXTURE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let content = if fixture {
            ContentBackendConfig::Fixture
        } else {
            ContentBackendConfig::Delivery {
                api_url: std::env::var("CONTENT_API_URL")
                    .expect("CONTENT_API_URL must be set (or CONTENT_FIXTURE=1)"),
                space_id: std::env::var("CONTENT_SPACE_ID")
                    .expect("CONTENT_SPACE_ID must be set (or CONTENT_FIXTURE=1)"),
                access_token: std::env::var("CONTENT_ACCESS_TOKEN")
                    .expect("CONTENT_ACCESS_TOKEN must be set (or CONTENT_FIXTURE=1)"),
            }
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            locales,
            content,
        }
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
