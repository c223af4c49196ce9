//! Static dataset embedded at compile time.
//!
//! `data/fallback_records.toml` holds a representative subset of the
//! clustering output (at least one regency per province that the API
//! normally serves). It is baked into the binary via [`include_str!`] and
//! used whenever the API cannot be reached.

use std::collections::BTreeSet;

use async_trait::async_trait;
use food_map_expenditure_models::{DataProvenance, PredictionRecord, RawRecord};
use serde::Deserialize;

use crate::{ExpenditureSource, SourceError};

const FALLBACK_TOML: &str = include_str!("../data/fallback_records.toml");

#[derive(Deserialize)]
struct FallbackDataset {
    records: Vec<RawRecord>,
}

/// Returns the embedded fallback records in file order.
///
/// # Errors
///
/// Returns [`SourceError::Fallback`] if the embedded TOML is malformed.
pub fn fallback_records() -> Result<Vec<RawRecord>, SourceError> {
    parse_records(FALLBACK_TOML)
}

/// Parses a `[[records]]` TOML document.
///
/// # Errors
///
/// Returns [`SourceError::Fallback`] if `text` is not a valid dataset.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>, SourceError> {
    toml::de::from_str::<FallbackDataset>(text)
        .map(|dataset| dataset.records)
        .map_err(|e| SourceError::Fallback {
            message: e.to_string(),
        })
}

/// Sorted, deduplicated grouping names of `records`.
#[must_use]
pub fn distinct_groupings(records: &[RawRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.region.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Serves the embedded dataset. Has no predictions.
#[derive(Debug, Clone, Default)]
pub struct StaticSource;

#[async_trait]
impl ExpenditureSource for StaticSource {
    fn provenance(&self) -> DataProvenance {
        DataProvenance::Fallback
    }

    async fn fetch_records(&self) -> Result<Vec<RawRecord>, SourceError> {
        fallback_records()
    }

    async fn fetch_predictions(&self) -> Result<Vec<PredictionRecord>, SourceError> {
        Ok(Vec::new())
    }

    async fn fetch_groupings(&self) -> Result<Vec<String>, SourceError> {
        Ok(distinct_groupings(&fallback_records()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED_RECORD_COUNT: usize = 32;

    #[test]
    fn loads_embedded_dataset() {
        let records = fallback_records().unwrap();
        assert_eq!(records.len(), EXPECTED_RECORD_COUNT);
        assert_eq!(records[0].place, "Aceh Barat");
        assert!((records[0].fruit_expenditure - 11_160.0).abs() < f64::EPSILON);
    }

    #[test]
    fn place_names_are_unique() {
        let records = fallback_records().unwrap();
        let mut seen = BTreeSet::new();
        for r in &records {
            assert!(seen.insert(&r.place), "Duplicate place: {}", r.place);
        }
    }

    #[test]
    fn expenditures_are_non_negative() {
        for r in &fallback_records().unwrap() {
            assert!(r.fruit_expenditure >= 0.0, "{}", r.place);
            assert!(r.vegetable_expenditure >= 0.0, "{}", r.place);
        }
    }

    #[test]
    fn covers_expected_groupings() {
        let groupings = distinct_groupings(&fallback_records().unwrap());
        for expected in [
            "Aceh",
            "Bali",
            "DKI Jakarta",
            "Jawa Barat",
            "Jawa Tengah",
            "Jawa Timur",
            "Kalimantan Barat",
            "Kalimantan Timur",
            "Lainnya",
            "Papua",
            "Sulawesi Selatan",
            "Sulawesi Tengah",
            "Sumatera Selatan",
            "Sumatera Utara",
        ] {
            assert!(groupings.iter().any(|g| g == expected), "missing {expected}");
        }
        assert_eq!(groupings.len(), 14);
    }

    #[test]
    fn groupings_are_sorted() {
        let groupings = distinct_groupings(&fallback_records().unwrap());
        let mut sorted = groupings.clone();
        sorted.sort();
        assert_eq!(groupings, sorted);
    }

    #[test]
    fn malformed_dataset_is_a_fallback_error() {
        let err = parse_records("[[records]]\nKabupaten_Kota = 42\n").unwrap_err();
        assert!(matches!(err, SourceError::Fallback { .. }), "{err}");
        assert!(err.to_string().starts_with("Fallback dataset error"));
    }

    #[test]
    fn empty_document_is_a_fallback_error() {
        assert!(matches!(
            parse_records(""),
            Err(SourceError::Fallback { .. })
        ));
    }

    #[tokio::test]
    async fn static_source_has_no_predictions() {
        let source = StaticSource;
        assert!(source.fetch_predictions().await.unwrap().is_empty());
        assert_eq!(source.provenance(), DataProvenance::Fallback);
        assert_eq!(source.fetch_records().await.unwrap().len(), EXPECTED_RECORD_COUNT);
    }
}
