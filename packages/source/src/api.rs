//! Client for the clustering API.
//!
//! Every endpoint wraps its payload in an [`ApiEnvelope`]. A response only
//! counts as data when the HTTP status is a success, `success` is `true`
//! and `data` is an array of the expected shape. Anything else is an error
//! for the caller to recover from.

use std::time::Duration;

use async_trait::async_trait;
use food_map_expenditure_models::{ApiEnvelope, DataProvenance, PredictionRecord, RawRecord};
use serde::de::DeserializeOwned;

use crate::{ExpenditureSource, SourceError};

/// Endpoint serving raw clustered expenditure records.
pub const CLUSTERS_ENDPOINT: &str = "/clusters";
/// Endpoint serving prediction records.
pub const PREDICTIONS_ENDPOINT: &str = "/predictions";
/// Endpoint serving the sorted list of groupings.
pub const REGIONS_LIST_ENDPOINT: &str = "/regions/list";

/// Reads the clustering API over HTTP.
#[derive(Debug, Clone)]
pub struct ApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl ApiSource {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:5000/api`).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a source that reuses an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The API root, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_list<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<T>, SourceError> {
        let url = format!("{}{endpoint}", self.base_url);
        log::debug!("Fetching {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: serde_json::Value = resp.json().await?;
        let items = parse_envelope(body, endpoint)?;
        log::info!("Loaded {} items from {endpoint}", items.len());
        Ok(items)
    }
}

#[async_trait]
impl ExpenditureSource for ApiSource {
    fn provenance(&self) -> DataProvenance {
        DataProvenance::Remote
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>, SourceError> {
        self.fetch_list(CLUSTERS_ENDPOINT).await
    }

    async fn fetch_predictions(&self) -> Result<Vec<PredictionRecord>, SourceError> {
        self.fetch_list(PREDICTIONS_ENDPOINT).await
    }

    async fn fetch_groupings(&self) -> Result<Vec<String>, SourceError> {
        self.fetch_list(REGIONS_LIST_ENDPOINT).await
    }
}

/// Unwraps an API envelope into its array payload.
///
/// # Errors
///
/// Returns [`SourceError::Envelope`] when `success` is not `true`, `data`
/// is missing, or `data` is not an array, and [`SourceError::Json`] when
/// the array items do not have the expected shape.
pub fn parse_envelope<T: DeserializeOwned>(
    body: serde_json::Value,
    endpoint: &str,
) -> Result<Vec<T>, SourceError> {
    let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_value(body)?;

    if !envelope.success {
        return Err(SourceError::Envelope {
            message: format!(
                "{endpoint} reported failure: {}",
                envelope.error.as_deref().unwrap_or("no error message")
            ),
        });
    }

    let data = envelope.data.ok_or_else(|| SourceError::Envelope {
        message: format!("{endpoint} returned no data"),
    })?;

    if !data.is_array() {
        return Err(SourceError::Envelope {
            message: format!("{endpoint} payload is not an array"),
        });
    }

    Ok(serde_json::from_value(data)?)
}
