#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Expenditure data sources.
//!
//! Every provider implements [`ExpenditureSource`]:
//!
//! - [`api::ApiSource`] reads the clustering API (`/clusters`,
//!   `/predictions`, `/regions/list`). One attempt per call, no retries.
//! - [`fallback::StaticSource`] serves the dataset embedded at compile time.
//!
//! Choosing between them is the pipeline's job.

pub mod api;
pub mod fallback;

use async_trait::async_trait;
use food_map_expenditure_models::{DataProvenance, PredictionRecord, RawRecord};

/// Errors that can occur while reading a data source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected HTTP status {status} from {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response envelope reported failure or carried no usable payload.
    #[error("Envelope error: {message}")]
    Envelope {
        /// Description of what went wrong.
        message: String,
    },

    /// The embedded dataset could not be parsed.
    #[error("Fallback dataset error: {message}")]
    Fallback {
        /// Parser message.
        message: String,
    },
}

/// Trait that all expenditure data sources must implement.
#[async_trait]
pub trait ExpenditureSource: Send + Sync {
    /// Where records from this source come from.
    fn provenance(&self) -> DataProvenance;

    /// Fetches raw expenditure records.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the records cannot be obtained.
    async fn fetch_records(&self) -> Result<Vec<RawRecord>, SourceError>;

    /// Fetches prediction records. Sources without a prediction model
    /// return an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the predictions cannot be obtained.
    async fn fetch_predictions(&self) -> Result<Vec<PredictionRecord>, SourceError>;

    /// Fetches the names of all groupings present in the data.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the list cannot be obtained.
    async fn fetch_groupings(&self) -> Result<Vec<String>, SourceError>;
}
