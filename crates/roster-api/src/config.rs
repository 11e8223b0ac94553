//! API server configuration
//!
//! Safe defaults overridden by environment variables; the database side of
//! the configuration lives in `roster_data::config`.

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 8080;

/// Bind settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    /// Load configuration from `ROSTER_HOST` / `ROSTER_PORT`, falling back to
    /// the defaults for anything unset or unparseable
    #[must_use]
    pub fn from_env() -> Self {
        let host =
            std::env::var("ROSTER_HOST").unwrap_or_else(|_| DEFAULT_API_HOST.to_string());
        let port = std::env::var("ROSTER_PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_API_PORT);

        Self { host, port }
    }

    /// The `host:port` pair to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_API_HOST.to_string(),
            port: DEFAULT_API_PORT,
        }
    }
}
