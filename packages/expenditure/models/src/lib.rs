#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Regional expenditure record types and the enriched output format.
//!
//! Raw records arrive from the clustering API (or the embedded fallback
//! dataset) using the upstream column names (`Kabupaten_Kota`,
//! `Pengeluaran_Buah`, ...). The enrichment pipeline turns each one into an
//! [`EnrichedRegion`], and a full pass produces an [`AnalysisResult`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// One regency/city expenditure observation as published by the
/// clustering API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Regency or city name (e.g. "Aceh Barat", "Kota Bandung").
    #[serde(rename = "Kabupaten_Kota")]
    pub place: String,
    /// Observation year.
    #[serde(rename = "Tahun")]
    pub year: i32,
    /// Parent grouping, usually a province (e.g. "Jawa Barat").
    #[serde(rename = "Region")]
    pub region: String,
    /// Fruit expenditure (Rp/capita/year).
    #[serde(rename = "Pengeluaran_Buah")]
    pub fruit_expenditure: f64,
    /// Vegetable expenditure (Rp/capita/year).
    #[serde(rename = "Pengeluaran_Sayur")]
    pub vegetable_expenditure: f64,
    /// Numeric cluster identifier assigned by the clustering model.
    #[serde(rename = "Cluster")]
    pub cluster: i32,
    /// Human-readable cluster label (e.g. "Low Expenditure").
    #[serde(rename = "Cluster_Label")]
    pub cluster_label: String,
    /// Cluster category, usually identical to the label.
    #[serde(rename = "Cluster_Category", default)]
    pub cluster_category: Option<String>,
}

impl RawRecord {
    /// Combined fruit and vegetable expenditure.
    #[must_use]
    pub fn total_expenditure(&self) -> f64 {
        self.fruit_expenditure + self.vegetable_expenditure
    }
}

/// Forward-looking metrics computed upstream for a single place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    /// Regency or city name, matched exactly against [`RawRecord::place`].
    #[serde(rename = "Kabupaten_Kota")]
    pub place: String,
    /// Parent grouping.
    #[serde(rename = "Region")]
    pub region: String,
    /// Numeric cluster identifier.
    #[serde(rename = "Cluster")]
    pub cluster: i32,
    /// Cluster label.
    #[serde(rename = "Cluster_Label")]
    pub cluster_label: String,
    /// Predicted fruit expenditure for the next year.
    #[serde(rename = "Predicted_Buah_2025")]
    pub predicted_fruit: f64,
    /// Predicted vegetable expenditure for the next year.
    #[serde(rename = "Predicted_Sayur_2025")]
    pub predicted_vegetable: f64,
    /// Predicted combined expenditure for the next year.
    #[serde(rename = "Predicted_Total_2025")]
    pub predicted_total: f64,
    /// Current-year fruit expenditure.
    #[serde(rename = "Current_Buah_2024")]
    pub current_fruit: f64,
    /// Current-year vegetable expenditure.
    #[serde(rename = "Current_Sayur_2024")]
    pub current_vegetable: f64,
    /// Fruit growth rate in percent.
    #[serde(rename = "Growth_Rate_Buah")]
    pub fruit_growth_rate: f64,
    /// Vegetable growth rate in percent.
    #[serde(rename = "Growth_Rate_Sayur")]
    pub vegetable_growth_rate: f64,
}

/// Response envelope shared by every clustering API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the server handled the request.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    /// Number of items in the payload.
    #[serde(default)]
    pub count: Option<u64>,
    /// Error message, present on failure.
    #[serde(default)]
    pub error: Option<String>,
}

/// Three-valued cluster classification used for map colouring.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum ClusterGroup {
    /// High expenditure cluster.
    High,
    /// Balanced or unrecognized cluster.
    Medium,
    /// Low expenditure cluster.
    Low,
}

impl ClusterGroup {
    /// Classifies a free-text cluster label.
    ///
    /// `"High"` is checked before `"Low"`, so a label containing both is
    /// classified as [`Self::High`]. Anything else is [`Self::Medium`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.contains("High") {
            Self::High
        } else if label.contains("Low") {
            Self::Low
        } else {
            Self::Medium
        }
    }

    /// All groups, highest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

/// What a region's figures measure.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum RegionCategory {
    /// Fruit only.
    Fruit,
    /// Vegetables only.
    Vegetable,
    /// Fruit and vegetables combined.
    Combined,
}

/// Where the raw records of an enrichment pass came from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum DataProvenance {
    /// Live clustering API.
    #[serde(rename = "API")]
    #[strum(serialize = "API")]
    Remote,
    /// Embedded static dataset.
    #[serde(rename = "Mock")]
    #[strum(serialize = "Mock")]
    Fallback,
}

/// A latitude/longitude pair (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// A single point of a yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyValue {
    /// Calendar year.
    pub year: i32,
    /// Expenditure value (Rp/capita/year).
    pub value: f64,
}

/// A regency/city enriched with synthesized metrics, coordinates and a
/// historical + forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedRegion {
    /// Stable identifier (the place name).
    pub id: String,
    /// Regency or city name.
    pub name: String,
    /// Parent grouping.
    pub province: String,
    /// What the figures measure.
    pub category: RegionCategory,
    /// Fruit expenditure.
    pub expenditure_fruit: f64,
    /// Vegetable expenditure.
    pub expenditure_veg: f64,
    /// Combined expenditure.
    pub total_expenditure: f64,
    /// Synthetic production estimate (tonnes).
    pub production: u64,
    /// Synthetic population estimate.
    pub population: u64,
    /// Year-over-year growth in percent, one decimal.
    pub growth_rate: f64,
    /// Three-valued cluster classification.
    pub cluster_group: ClusterGroup,
    /// Raw numeric cluster id.
    pub cluster_id: i32,
    /// Estimated map position.
    pub coordinates: Coordinates,
    /// Three points ending at the observation year.
    pub historical_data: Vec<YearlyValue>,
    /// Two points following the observation year.
    pub forecast_data: Vec<YearlyValue>,
}

/// Output of a full enrichment pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Enriched regions in input order.
    pub regions: Vec<EnrichedRegion>,
    /// Narrative summary of the pass.
    pub summary: String,
    /// Advisory recommendations.
    pub recommendations: Vec<String>,
}

/// Dataset-wide counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetOverview {
    /// Number of enriched regions.
    pub total_regions: usize,
    /// Number of distinct parent groupings.
    pub total_groupings: usize,
    /// Number of distinct numeric cluster ids.
    pub total_clusters: usize,
    /// Observation years present, ascending.
    pub years_covered: Vec<i32>,
}

/// Average/min/max of fruit and vegetable expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenditureSummary {
    /// Mean fruit expenditure.
    pub avg_fruit: f64,
    /// Mean vegetable expenditure.
    pub avg_veg: f64,
    /// Maximum fruit expenditure.
    pub max_fruit: f64,
    /// Maximum vegetable expenditure.
    pub max_veg: f64,
    /// Minimum fruit expenditure.
    pub min_fruit: f64,
    /// Minimum vegetable expenditure.
    pub min_veg: f64,
}

/// Number of regions in a grouping and their mean expenditures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingCount {
    /// Grouping name.
    pub grouping: String,
    /// Number of regions.
    pub count: usize,
    /// Mean fruit expenditure of the grouping's regions.
    pub avg_fruit: f64,
    /// Mean vegetable expenditure of the grouping's regions.
    pub avg_veg: f64,
}

/// Summary statistics over a set of enriched regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStatistics {
    /// Dataset-wide counts.
    pub overview: DatasetOverview,
    /// Regions per cluster group.
    pub cluster_distribution: BTreeMap<ClusterGroup, usize>,
    /// Regions per grouping, most populous first.
    pub regional_distribution: Vec<GroupingCount>,
    /// Expenditure aggregates.
    pub expenditure_summary: ExpenditureSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_group_checks_high_before_low() {
        assert_eq!(ClusterGroup::from_label("High Expenditure"), ClusterGroup::High);
        assert_eq!(ClusterGroup::from_label("Low Expenditure"), ClusterGroup::Low);
        assert_eq!(
            ClusterGroup::from_label("Balanced Expenditure"),
            ClusterGroup::Medium
        );
        assert_eq!(ClusterGroup::from_label("Low-High"), ClusterGroup::High);
    }

    #[test]
    fn cluster_group_match_is_case_sensitive() {
        assert_eq!(ClusterGroup::from_label("high"), ClusterGroup::Medium);
    }

    #[test]
    fn raw_record_uses_upstream_column_names() {
        let record: RawRecord = serde_json::from_value(serde_json::json!({
            "Kabupaten_Kota": "Aceh Barat",
            "Tahun": 2024,
            "Region": "Aceh",
            "Pengeluaran_Buah": 11160.0,
            "Pengeluaran_Sayur": 15821.0,
            "Cluster": 0,
            "Cluster_Label": "Low Expenditure",
            "Cluster_Category": "Low Expenditure"
        }))
        .unwrap();

        assert_eq!(record.place, "Aceh Barat");
        assert_eq!(record.year, 2024);
        assert!((record.total_expenditure() - 26_981.0).abs() < 1e-9);
    }

    #[test]
    fn raw_record_without_category_still_parses() {
        let record: RawRecord = serde_json::from_value(serde_json::json!({
            "Kabupaten_Kota": "Badung",
            "Tahun": 2024,
            "Region": "Bali",
            "Pengeluaran_Buah": 13811,
            "Pengeluaran_Sayur": 16137,
            "Cluster": 0,
            "Cluster_Label": "Low Expenditure"
        }))
        .unwrap();

        assert!(record.cluster_category.is_none());
    }

    #[test]
    fn envelope_defaults_missing_fields() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_value(serde_json::json!({ "error": "boom" })).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }

    #[test]
    fn enriched_region_serializes_camel_case() {
        let region = EnrichedRegion {
            id: "Badung".to_string(),
            name: "Badung".to_string(),
            province: "Bali".to_string(),
            category: RegionCategory::Combined,
            expenditure_fruit: 1.0,
            expenditure_veg: 2.0,
            total_expenditure: 3.0,
            production: 10_000,
            population: 200_000,
            growth_rate: -1.7,
            cluster_group: ClusterGroup::Low,
            cluster_id: 0,
            coordinates: Coordinates { lat: -8.3, lng: 115.1 },
            historical_data: Vec::new(),
            forecast_data: Vec::new(),
        };

        let value = serde_json::to_value(&region).unwrap();
        assert_eq!(value["clusterGroup"], "Low");
        assert_eq!(value["category"], "Combined");
        assert_eq!(value["totalExpenditure"], 3.0);
        assert!(value.get("historicalData").is_some());
    }

    #[test]
    fn provenance_labels() {
        assert_eq!(DataProvenance::Remote.to_string(), "API");
        assert_eq!(DataProvenance::Fallback.to_string(), "Mock");
    }

    #[test]
    fn provenance_serializes_like_its_display() {
        for provenance in [DataProvenance::Remote, DataProvenance::Fallback] {
            let value = serde_json::to_value(provenance).unwrap();
            assert_eq!(value, serde_json::json!(provenance.to_string()));
            let back: DataProvenance = serde_json::from_value(value).unwrap();
            assert_eq!(back, provenance);
        }
    }
}
