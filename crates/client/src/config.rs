/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API server, without the `/api` prefix.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Point at `api_url` with the default timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout_secs: 30,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `WAYFARER_API_URL`        | `http://localhost:3000`  |
    /// | `WAYFARER_TIMEOUT_SECS`   | `30`                     |
    ///
    /// An unparsable timeout falls back to the default with a warning.
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("WAYFARER_API_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let timeout_secs = match std::env::var("WAYFARER_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "WAYFARER_TIMEOUT_SECS is not a number, using 30");
                30
            }),
            Err(_) => 30,
        };

        Self {
            api_url,
            timeout_secs,
        }
    }
}
