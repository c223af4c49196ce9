#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Turns raw expenditure records into chart-ready [`EnrichedRegion`]s.
//!
//! For every record the enrichment step:
//!
//! 1. Places it on the map with [`food_map_geography::estimate_coordinates`].
//! 2. Derives cluster group, growth rate, population and production
//!    ([`synthesize`]).
//! 3. Builds a three-point history and a two-point forecast ([`series`]).
//!
//! Prediction records are optional. When one exists for a place it takes
//! precedence for the growth rate and the forecast.
//!
//! Everything here is pure: identical input always yields identical output.

pub mod search;
pub mod series;
pub mod stats;
pub mod synthesize;

use std::collections::HashMap;

use food_map_expenditure_models::{EnrichedRegion, PredictionRecord, RawRecord, RegionCategory};
use food_map_geography::estimate_coordinates;

pub use search::search_regions;
pub use stats::dataset_statistics;

/// Enriches a single record with its (optional) prediction.
#[must_use]
pub fn enrich_record(record: &RawRecord, prediction: Option<&PredictionRecord>) -> EnrichedRegion {
    let total = record.total_expenditure();
    let metrics = synthesize::synthesize_metrics(record, prediction);
    let trend = series::compose_series(record.year, total, metrics.growth_rate, prediction);

    EnrichedRegion {
        id: record.place.clone(),
        name: record.place.clone(),
        province: record.region.clone(),
        category: RegionCategory::Combined,
        expenditure_fruit: record.fruit_expenditure,
        expenditure_veg: record.vegetable_expenditure,
        total_expenditure: total,
        production: metrics.production,
        population: metrics.population,
        growth_rate: metrics.growth_rate,
        cluster_group: metrics.cluster_group,
        cluster_id: record.cluster,
        coordinates: estimate_coordinates(&record.region, &record.place),
        historical_data: trend.historical,
        forecast_data: trend.forecast,
    }
}

/// Indexes predictions by exact place name. When a place appears more than
/// once the first entry wins.
#[must_use]
pub fn index_predictions(predictions: &[PredictionRecord]) -> HashMap<&str, &PredictionRecord> {
    let mut index = HashMap::with_capacity(predictions.len());
    for prediction in predictions {
        index.entry(prediction.place.as_str()).or_insert(prediction);
    }
    index
}

/// Enriches every record, matching predictions by exact place name.
/// Output order follows `records`.
#[must_use]
pub fn enrich_records(
    records: &[&RawRecord],
    predictions: &[PredictionRecord],
) -> Vec<EnrichedRegion> {
    let index = index_predictions(predictions);
    let mut matched = 0usize;

    let regions: Vec<EnrichedRegion> = records
        .iter()
        .map(|record| {
            let prediction = index.get(record.place.as_str()).copied();
            if prediction.is_some() {
                matched += 1;
            }
            enrich_record(record, prediction)
        })
        .collect();

    log::debug!(
        "enrich_records: {} regions, {matched} with predictions",
        regions.len()
    );

    regions
}
