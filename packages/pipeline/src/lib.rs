#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Regional enrichment pipeline.
//!
//! [`Pipeline::analyze`] runs one full pass:
//!
//! 1. Fetch raw records and predictions from the primary source
//!    concurrently. A failed or empty record fetch falls back to the
//!    embedded dataset; a failed prediction fetch falls back to no
//!    predictions. Neither is reported to the caller.
//! 2. Narrow the records to the requested [`RegionScope`] and, optionally,
//!    a [`RecordSelection`] of cluster id and year.
//! 3. Enrich each record and assemble an [`AnalysisResult`].
//!
//! Each call is independent: there is no cache, no retry and no shared
//! mutable state.

pub mod config;
pub mod summary;

use std::sync::Arc;

use food_map_enrichment::enrich_records;
use food_map_expenditure_models::{AnalysisResult, DataProvenance, PredictionRecord, RawRecord};
use food_map_geography::filter::ALL_TOKEN;
use food_map_geography::{RegionScope, select_records};
use food_map_source::api::ApiSource;
use food_map_source::fallback::StaticSource;
use food_map_source::{ExpenditureSource, SourceError};

pub use config::{ConfigError, PipelineConfig};
pub use food_map_geography::RecordSelection;

/// Errors from constructing a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The primary source could not be created.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Records and predictions obtained for one pass.
#[derive(Debug, Clone)]
pub struct AcquiredData {
    /// Raw records before filtering.
    pub records: Vec<RawRecord>,
    /// Predictions, possibly empty.
    pub predictions: Vec<PredictionRecord>,
    /// Where `records` came from.
    pub provenance: DataProvenance,
}

/// Orchestrates acquisition, filtering and enrichment.
#[derive(Clone)]
pub struct Pipeline {
    primary: Option<Arc<dyn ExpenditureSource>>,
    fallback: Arc<dyn ExpenditureSource>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("primary", &self.primary.as_ref().map(|s| s.provenance()))
            .field("fallback", &self.fallback.provenance())
            .finish()
    }
}

impl Pipeline {
    /// Builds a pipeline reading the clustering API described by `config`,
    /// or only the embedded dataset when `use_mock_data` is set.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Source`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &PipelineConfig) -> Result<Self, PipelineError> {
        let primary: Option<Arc<dyn ExpenditureSource>> = if config.use_mock_data {
            log::info!("Mock mode enabled, using the embedded dataset only");
            None
        } else {
            log::info!("Using clustering API at {}", config.api_base_url);
            Some(Arc::new(ApiSource::new(
                &config.api_base_url,
                config.request_timeout(),
            )?))
        };

        Ok(Self::with_sources(primary, Arc::new(StaticSource)))
    }

    /// Builds a pipeline from explicit sources.
    #[must_use]
    pub fn with_sources(
        primary: Option<Arc<dyn ExpenditureSource>>,
        fallback: Arc<dyn ExpenditureSource>,
    ) -> Self {
        Self { primary, fallback }
    }

    /// Obtains records and predictions, degrading to the fallback source
    /// on any failure.
    pub async fn acquire(&self) -> AcquiredData {
        if let Some(primary) = &self.primary {
            let (records, predictions) =
                futures::join!(primary.fetch_records(), primary.fetch_predictions());

            let predictions = predictions.unwrap_or_else(|e| {
                log::warn!("Prediction fetch failed, continuing without predictions: {e}");
                Vec::new()
            });

            match records {
                Ok(records) if !records.is_empty() => {
                    log::info!("Loaded {} records from {}", records.len(), primary.provenance());
                    return AcquiredData {
                        records,
                        predictions,
                        provenance: primary.provenance(),
                    };
                }
                Ok(_) => log::warn!("Primary source returned no records, falling back"),
                Err(e) => log::warn!("Record fetch failed, falling back: {e}"),
            }

            return AcquiredData {
                records: self.fallback_records().await,
                predictions,
                provenance: self.fallback.provenance(),
            };
        }

        let predictions = self.fallback.fetch_predictions().await.unwrap_or_else(|e| {
            log::warn!("Fallback predictions unavailable: {e}");
            Vec::new()
        });

        AcquiredData {
            records: self.fallback_records().await,
            predictions,
            provenance: self.fallback.provenance(),
        }
    }

    async fn fallback_records(&self) -> Vec<RawRecord> {
        log::info!("Using {} records", self.fallback.provenance());
        self.fallback.fetch_records().await.unwrap_or_else(|e| {
            log::error!("Fallback source failed: {e}");
            Vec::new()
        })
    }

    /// Runs a full enrichment pass for the given selection token
    /// (`None` or `"All"` for everything).
    pub async fn analyze(&self, token: Option<&str>) -> AnalysisResult {
        self.analyze_selected(token, RecordSelection::default()).await
    }

    /// Like [`Self::analyze`], additionally pinning cluster id and year.
    pub async fn analyze_selected(
        &self,
        token: Option<&str>,
        selection: RecordSelection,
    ) -> AnalysisResult {
        let data = self.acquire().await;
        analyze_selection(&data, &RegionScope::from_token(token), selection)
    }

    /// Grouping names for selection menus: `"All"` followed by the sorted,
    /// deduplicated groupings of the primary source, or of the fallback
    /// when the primary is unavailable.
    pub async fn available_groupings(&self) -> Vec<String> {
        let groupings = match &self.primary {
            Some(primary) => match primary.fetch_groupings().await {
                Ok(list) => {
                    log::info!("Loaded {} groupings from {}", list.len(), primary.provenance());
                    list
                }
                Err(e) => {
                    log::warn!("Grouping fetch failed, falling back: {e}");
                    self.fallback_groupings().await
                }
            },
            None => self.fallback_groupings().await,
        };

        with_all_prefix(groupings)
    }

    async fn fallback_groupings(&self) -> Vec<String> {
        self.fallback.fetch_groupings().await.unwrap_or_else(|e| {
            log::error!("Fallback groupings unavailable: {e}");
            Vec::new()
        })
    }
}

/// Filters and enriches already-acquired data.
#[must_use]
pub fn analyze_acquired(data: &AcquiredData, scope: &RegionScope) -> AnalysisResult {
    analyze_selection(data, scope, RecordSelection::default())
}

/// Filters by scope and selection, then enriches already-acquired data.
#[must_use]
pub fn analyze_selection(
    data: &AcquiredData,
    scope: &RegionScope,
    selection: RecordSelection,
) -> AnalysisResult {
    let selected = select_records(&data.records, scope, selection);
    let regions = enrich_records(&selected, &data.predictions);

    AnalysisResult {
        regions,
        summary: summary::compose_summary(data.records.len(), data.provenance),
        recommendations: summary::recommendations(),
    }
}

fn with_all_prefix(mut groupings: Vec<String>) -> Vec<String> {
    groupings.retain(|g| g != ALL_TOKEN);
    groupings.sort();
    groupings.dedup();
    groupings.insert(0, ALL_TOKEN.to_string());
    groupings
}
