//! Environment-driven server configuration.
//!
//! All secrets stay server-side; nothing from here is ever handed to the
//! static asset tree. The record is built once at startup and injected
//! into handlers through the shared application state.

use safe_commute_source::SocrataConfig;
use safe_commute_source::socrata::DEFAULT_FETCH_LIMIT;

/// Default URL of the news pass-through target.
pub const DEFAULT_NEWS_API_URL: &str = "https://newsdata.io/api/1/news";

/// Configuration for the news pass-through endpoint.
#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// News feed API URL.
    pub api_url: String,
    /// API key forwarded as the `apikey` query parameter.
    pub api_key: Option<String>,
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind.
    pub bind_addr: String,
    /// Port to bind.
    pub port: u16,
    /// Directory served as the static HTML shell.
    pub static_dir: String,
    /// Upstream incident feed settings.
    pub crime: SocrataConfig,
    /// News feed settings.
    pub news: NewsConfig,
}

impl ServerConfig {
    /// Reads configuration from the environment, falling back to
    /// defaults for everything but the optional tokens.
    #[must_use]
    pub fn from_env() -> Self {
        let crime = SocrataConfig {
            api_url: std::env::var("NYC_OPEN_DATA_URL")
                .unwrap_or_else(|_| safe_commute_source::socrata::DEFAULT_API_URL.to_string()),
            app_token: std::env::var("NYC_OPEN_DATA_TOKEN").ok(),
            limit: std::env::var("CRIME_FETCH_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FETCH_LIMIT),
        };

        let news = NewsConfig {
            api_url: std::env::var("NEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string()),
            api_key: std::env::var("NEWS_API_KEY").ok(),
        };

        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            crime,
            news,
        }
    }
}
