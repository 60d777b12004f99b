//! Socrata SODA API fetcher for the NYPD complaint dataset.
//!
//! Issues a single bounded query using the `$limit` and `$where`
//! parameters. One attempt per incoming request: no pagination, no retry,
//! no backoff. The caller supplies the shared `reqwest::Client`, which is
//! expected to carry the request timeout.

use serde_json::Value;

use crate::SourceError;

/// NYPD Complaint Data Current (Year To Date).
pub const DEFAULT_API_URL: &str = "https://data.cityofnewyork.us/resource/qb7u-rbmr.json";

/// Default record cap for a single fetch.
pub const DEFAULT_FETCH_LIMIT: u64 = 1000;

/// SoQL predicate restricting results to Manhattan.
const MANHATTAN_FILTER: &str = "boro_nm = 'MANHATTAN'";

/// Configuration for the upstream incident feed.
#[derive(Debug, Clone)]
pub struct SocrataConfig {
    /// Dataset API URL.
    pub api_url: String,
    /// Optional Socrata application token, sent as `X-App-Token`.
    /// Anonymous requests work but are throttled more aggressively.
    pub app_token: Option<String>,
    /// Maximum number of records to request.
    pub limit: u64,
}

impl Default for SocrataConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            app_token: None,
            limit: DEFAULT_FETCH_LIMIT,
        }
    }
}

/// Fetches raw Manhattan complaint records from the upstream dataset.
///
/// The response body is decoded as a JSON array of open-ended records;
/// per-field coercion is left to [`crate::normalize`].
///
/// # Errors
///
/// Returns [`SourceError::Http`] on transport failure or timeout,
/// [`SourceError::Rejected`] on a non-2xx upstream status, and
/// [`SourceError::Json`] when the body is not a JSON array.
pub async fn fetch_manhattan_incidents(
    client: &reqwest::Client,
    config: &SocrataConfig,
) -> Result<Vec<Value>, SourceError> {
    let limit = config.limit.to_string();
    let mut request = client
        .get(&config.api_url)
        .query(&[("$limit", limit.as_str()), ("$where", MANHATTAN_FILTER)]);

    if let Some(token) = &config.app_token {
        request = request.header("X-App-Token", token);
    }

    log::info!("Fetching NYC incident feed: limit={limit}");
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        log::error!("NYC incident feed rejected request: status={status}");
        return Err(SourceError::Rejected { status });
    }

    let body = response.text().await?;
    let records: Vec<Value> = serde_json::from_str(&body)?;
    log::info!("Downloaded {} raw records", records.len());
    Ok(records)
}
