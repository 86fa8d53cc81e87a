use anyhow::{Context, Result};

pub const DEFAULT_HR_API_BASE_URL: &str = "https://sandbox.api.sap.com/successfactors/odata/v2";

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub hr_api_base_url: String,
    pub hr_api_username: String,
    pub hr_api_password: String,
    pub hr_api_key: String,
    pub hr_api_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            hr_api_base_url: get("HR_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_HR_API_BASE_URL.to_string()),
            hr_api_username: require(&get, "HR_API_USERNAME")?,
            hr_api_password: require(&get, "HR_API_PASSWORD")?,
            hr_api_key: require(&get, "HR_API_KEY")?,
            hr_api_timeout_secs: get("HR_API_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse::<u64>()
                .context("HR_API_TIMEOUT_SECS must be a whole number of seconds")?,
            port: get("PORT")
                .unwrap_or_else(|| "10000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    /// Config pointing at an arbitrary upstream, with fixed test credentials.
    pub fn for_upstream(base_url: &str) -> Self {
        Config {
            hr_api_base_url: base_url.trim_end_matches('/').to_string(),
            hr_api_username: "user".to_string(),
            hr_api_password: "pass".to_string(),
            hr_api_key: "test-key".to_string(),
            hr_api_timeout_secs: 5,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
