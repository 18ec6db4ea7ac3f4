/// Configuration for tracing initialization, read once per session from the
/// same `GENOLENS_*` environment namespace as the settings overrides.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("GENOLENS_ENV")
                .unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("GENOLENS_LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
