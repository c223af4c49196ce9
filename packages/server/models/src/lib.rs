#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the food map server.
//!
//! Enriched regions and statistics are served as-is from
//! [`food_map_expenditure_models`]; this crate only adds the envelope and
//! query-string types specific to the HTTP API.

use chrono::{DateTime, Utc};
use food_map_expenditure_models::EnrichedRegion;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
    /// When the check was answered.
    pub timestamp: DateTime<Utc>,
}

/// Query parameters selecting a grouping scope, cluster id and year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeQueryParams {
    /// Selection token (`All`, `Jawa`, `Sumatera`, or a grouping fragment).
    pub region: Option<String>,
    /// Numeric cluster id.
    pub cluster: Option<i32>,
    /// Observation year.
    pub year: Option<i32>,
}

/// Query parameters for place-name search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQueryParams {
    /// Case-insensitive place-name fragment.
    pub q: Option<String>,
}

/// Place-name search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSearchResult {
    /// The query as received.
    pub query: String,
    /// Number of matches.
    pub count: usize,
    /// Matching regions.
    pub data: Vec<EnrichedRegion>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Description of what went wrong.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_result_serializes_camel_case() {
        let value = serde_json::to_value(ApiSearchResult {
            query: "bandung".to_string(),
            count: 0,
            data: Vec::new(),
        })
        .unwrap();
        assert_eq!(value["query"], "bandung");
        assert_eq!(value["count"], 0);
    }

    #[test]
    fn scope_params_default_to_none() {
        let params: ScopeQueryParams = serde_json::from_str("{}").unwrap();
        assert!(params.region.is_none());
        assert!(params.cluster.is_none());
        assert!(params.year.is_none());
    }

    #[test]
    fn scope_params_read_cluster_and_year() {
        let params: ScopeQueryParams =
            serde_json::from_str(r#"{"region":"Papua","cluster":2,"year":2024}"#).unwrap();
        assert_eq!(params.region.as_deref(), Some("Papua"));
        assert_eq!(params.cluster, Some(2));
        assert_eq!(params.year, Some(2024));
    }
}
