//! Derived per-region metrics.
//!
//! The expenditure data has no population or production figures, and
//! growth rates only exist when the prediction model has covered a place.
//! Missing values are derived from the summed expenditure so that the same
//! input always produces the same numbers. Population and production are
//! display filler, not estimates of anything real.

use food_map_expenditure_models::{ClusterGroup, PredictionRecord, RawRecord};

/// Base of the synthetic population estimate.
pub const POPULATION_BASE: f64 = 200_000.0;
/// Population added per unit of the pseudo-random seed.
pub const POPULATION_STEP: f64 = 30_000.0;
/// Base of the synthetic production estimate (tonnes).
pub const PRODUCTION_BASE: f64 = 10_000.0;
/// Production added per unit of the pseudo-random seed.
pub const PRODUCTION_STEP: f64 = 500.0;

/// Metrics derived for a single record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesizedMetrics {
    /// Three-valued cluster classification.
    pub cluster_group: ClusterGroup,
    /// Growth in percent, rounded to one decimal.
    pub growth_rate: f64,
    /// Synthetic population estimate.
    pub population: u64,
    /// Synthetic production estimate.
    pub production: u64,
}

/// Summed expenditure modulo 100.
#[must_use]
pub fn pseudo_random(record: &RawRecord) -> f64 {
    record.total_expenditure() % 100.0
}

/// Rounds to one decimal place, matching `Number.prototype.toFixed(1)`.
///
/// Rounding is decided on the exact binary value, so `1.15` (stored as
/// `1.1499999...`) becomes `1.1`. Only values with an odd number of
/// quarters sit exactly halfway; those round away from zero.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn round1(value: f64) -> f64 {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).round() / 10.0;
    }

    format!("{value:.1}").parse().unwrap_or(value)
}

/// Growth rate in percent. The prediction's mean fruit/vegetable growth
/// wins when present; otherwise the rate is `seed / 10 - 2`.
#[must_use]
pub fn growth_rate(seed: f64, prediction: Option<&PredictionRecord>) -> f64 {
    prediction.map_or_else(
        || round1(seed / 10.0 - 2.0),
        |p| round1(f64::midpoint(p.fruit_growth_rate, p.vegetable_growth_rate)),
    )
}

/// Derives cluster group, growth rate, population and production for one
/// record.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn synthesize_metrics(
    record: &RawRecord,
    prediction: Option<&PredictionRecord>,
) -> SynthesizedMetrics {
    let seed = pseudo_random(record);

    SynthesizedMetrics {
        cluster_group: ClusterGroup::from_label(&record.cluster_label),
        growth_rate: growth_rate(seed, prediction),
        population: (POPULATION_BASE + seed * POPULATION_STEP).floor() as u64,
        production: (PRODUCTION_BASE + seed * PRODUCTION_STEP).floor() as u64,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn aceh_barat() -> RawRecord {
        RawRecord {
            place: "Aceh Barat".to_string(),
            year: 2024,
            region: "Aceh".to_string(),
            fruit_expenditure: 11_160.0,
            vegetable_expenditure: 15_821.0,
            cluster: 0,
            cluster_label: "Low Expenditure".to_string(),
            cluster_category: Some("Low Expenditure".to_string()),
        }
    }

    pub fn aceh_barat_prediction() -> PredictionRecord {
        PredictionRecord {
            place: "Aceh Barat".to_string(),
            region: "Aceh".to_string(),
            cluster: 0,
            cluster_label: "Low Expenditure".to_string(),
            predicted_fruit: 12_000.0,
            predicted_vegetable: 18_000.0,
            predicted_total: 30_000.0,
            current_fruit: 11_160.0,
            current_vegetable: 15_821.0,
            fruit_growth_rate: 3.0,
            vegetable_growth_rate: 5.0,
        }
    }

    #[test]
    fn synthesizes_without_prediction() {
        let metrics = synthesize_metrics(&aceh_barat(), None);
        assert!((pseudo_random(&aceh_barat()) - 81.0).abs() < f64::EPSILON);
        assert_eq!(metrics.cluster_group, ClusterGroup::Low);
        assert!((metrics.growth_rate - 6.1).abs() < 1e-9);
        assert_eq!(metrics.population, 2_630_000);
        assert_eq!(metrics.production, 50_500);
    }

    #[test]
    fn prediction_overrides_growth_only() {
        let prediction = aceh_barat_prediction();
        let metrics = synthesize_metrics(&aceh_barat(), Some(&prediction));
        assert!((metrics.growth_rate - 4.0).abs() < 1e-9);
        assert_eq!(metrics.population, 2_630_000);
        assert_eq!(metrics.production, 50_500);
    }

    #[test]
    fn growth_rate_is_rounded_to_one_decimal() {
        let mut prediction = aceh_barat_prediction();
        prediction.fruit_growth_rate = 1.234;
        prediction.vegetable_growth_rate = 2.0;
        assert!((growth_rate(0.0, Some(&prediction)) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn round1_uses_the_stored_binary_value() {
        assert!((round1(1.15) - 1.1).abs() < 1e-9);
        assert!((round1(0.35) - 0.3).abs() < 1e-9);
        assert!((round1(-1.95) - -1.9).abs() < 1e-9);
        assert!((round1(1.16) - 1.2).abs() < 1e-9);
        assert!((round1(6.1) - 6.1).abs() < 1e-9);
    }

    #[test]
    fn round1_exact_ties_go_away_from_zero() {
        assert!((round1(0.25) - 0.3).abs() < 1e-9);
        assert!((round1(-0.25) - -0.3).abs() < 1e-9);
        assert!((round1(2.75) - 2.8).abs() < 1e-9);
    }

    #[test]
    fn prediction_growth_near_half_rounds_down() {
        let mut prediction = aceh_barat_prediction();
        prediction.fruit_growth_rate = 1.15;
        prediction.vegetable_growth_rate = 1.15;
        assert!((growth_rate(0.0, Some(&prediction)) - 1.1).abs() < 1e-9);

        prediction.fruit_growth_rate = 0.35;
        prediction.vegetable_growth_rate = 0.35;
        assert!((growth_rate(0.0, Some(&prediction)) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn fractional_seed_growth_rounds_toward_stored_value() {
        assert!((growth_rate(0.5, None) - -1.9).abs() < 1e-9);
    }

    #[test]
    fn zero_seed_gives_minimum_values() {
        let mut record = aceh_barat();
        record.fruit_expenditure = 10_000.0;
        record.vegetable_expenditure = 5_000.0;
        let metrics = synthesize_metrics(&record, None);
        assert!((metrics.growth_rate - -2.0).abs() < 1e-9);
        assert_eq!(metrics.population, 200_000);
        assert_eq!(metrics.production, 10_000);
    }

    #[test]
    fn fractional_expenditure_keeps_fraction_in_seed() {
        let mut record = aceh_barat();
        record.fruit_expenditure = 100.5;
        record.vegetable_expenditure = 0.0;
        let metrics = synthesize_metrics(&record, None);
        assert!((pseudo_random(&record) - 0.5).abs() < 1e-9);
        assert_eq!(metrics.population, 215_000);
        assert_eq!(metrics.production, 10_250);
    }

    #[test]
    fn label_with_both_markers_is_high() {
        let mut record = aceh_barat();
        record.cluster_label = "Low to High Expenditure".to_string();
        assert_eq!(synthesize_metrics(&record, None).cluster_group, ClusterGroup::High);
    }
}
