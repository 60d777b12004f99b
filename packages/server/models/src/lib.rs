#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the safe-commute server.
//!
//! These types are serialized to JSON for the REST API. They are kept
//! separate from the normalization types so the API contract can evolve
//! independently.

use safe_commute_incident_models::Incident;
use serde::{Deserialize, Serialize};

/// Success envelope of the crime endpoint: `{"data": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeDataResponse {
    /// Normalized incidents in upstream order.
    pub data: Vec<Incident>,
}

/// Error body returned by all endpoints on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Generic, user-safe error message.
    pub error: String,
    /// Underlying cause, when one is worth surfacing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Request body of the chat endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
}

/// Response body of the chat endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    /// Canned reply with `<br>` line breaks.
    pub response: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use safe_commute_incident_models::Severity;

    #[test]
    fn empty_crime_response_serializes_to_empty_data_array() {
        let json = serde_json::to_string(&CrimeDataResponse { data: vec![] }).unwrap();
        assert_eq!(json, r#"{"data":[]}"#);
    }

    #[test]
    fn crime_response_wire_shape() {
        let response = CrimeDataResponse {
            data: vec![Incident {
                latitude: 40.7831,
                longitude: -73.9712,
                severity: Severity::Felony,
            }],
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"data":[{"latitude":40.7831,"longitude":-73.9712,"severity":"FELONY"}]}"#
        );
    }

    #[test]
    fn api_error_omits_absent_details() {
        let json = serde_json::to_string(&ApiError {
            error: "Failed to fetch crime data".to_string(),
            details: None,
        })
        .unwrap();
        assert_eq!(json, r#"{"error":"Failed to fetch crime data"}"#);
    }

    #[test]
    fn api_error_includes_details_when_present() {
        let json = serde_json::to_string(&ApiError {
            error: "Failed to fetch crime data".to_string(),
            details: Some("upstream rejected request with status 500".to_string()),
        })
        .unwrap();
        assert!(json.contains(r#""details":"upstream rejected request with status 500""#));
    }
}
