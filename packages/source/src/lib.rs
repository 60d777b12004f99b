#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! NYC Open Data incident feed client and normalization logic.
//!
//! [`socrata`] fetches raw complaint records from the NYPD dataset on the
//! Socrata SODA API; [`normalize`] projects them down to the minimal
//! [`Incident`](safe_commute_incident_models::Incident) wire format.

pub mod normalize;
pub mod socrata;

pub use normalize::normalize;
pub use socrata::{SocrataConfig, fetch_manhattan_incidents};

/// Errors that can occur while fetching the upstream incident feed.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed (network error, DNS failure, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream rejected request with status {status}")]
    Rejected {
        /// The upstream HTTP status code.
        status: reqwest::StatusCode,
    },

    /// Response body was not the expected JSON array.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
