//! Historical and forecast series for a region.
//!
//! History is reconstructed from the current total with fixed shrink
//! factors. The forecast uses the prediction model's next-year total when
//! available and extrapolates the growth rate otherwise.

use food_map_expenditure_models::{PredictionRecord, YearlyValue};

/// Fractions of the current total used for two years back and one year
/// back.
pub const HISTORICAL_FACTORS: [f64; 2] = [0.95, 0.98];
/// Second-year multiplier applied to a model prediction.
pub const PREDICTED_SECOND_YEAR_FACTOR: f64 = 1.03;
/// Second-year multiplier applied to an extrapolated forecast.
pub const EXTRAPOLATED_SECOND_YEAR_FACTOR: f64 = 1.05;

/// A region's two series, both ordered by ascending year.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    /// `year - 2`, `year - 1`, `year`.
    pub historical: Vec<YearlyValue>,
    /// `year + 1`, `year + 2`.
    pub forecast: Vec<YearlyValue>,
}

/// Builds the three historical points ending at `year`.
#[must_use]
pub fn historical_series(year: i32, total: f64) -> Vec<YearlyValue> {
    vec![
        YearlyValue {
            year: year - 2,
            value: total * HISTORICAL_FACTORS[0],
        },
        YearlyValue {
            year: year - 1,
            value: total * HISTORICAL_FACTORS[1],
        },
        YearlyValue { year, value: total },
    ]
}

/// Builds the two forecast points following `year`.
#[must_use]
pub fn forecast_series(
    year: i32,
    total: f64,
    growth_rate: f64,
    prediction: Option<&PredictionRecord>,
) -> Vec<YearlyValue> {
    let (next, after) = prediction.map_or_else(
        || {
            let next = total * (1.0 + growth_rate / 100.0);
            (next, next * EXTRAPOLATED_SECOND_YEAR_FACTOR)
        },
        |p| {
            (
                p.predicted_total,
                p.predicted_total * PREDICTED_SECOND_YEAR_FACTOR,
            )
        },
    );

    vec![
        YearlyValue {
            year: year + 1,
            value: next,
        },
        YearlyValue {
            year: year + 2,
            value: after,
        },
    ]
}

/// Builds both series for a region observed in `year`.
#[must_use]
pub fn compose_series(
    year: i32,
    total: f64,
    growth_rate: f64,
    prediction: Option<&PredictionRecord>,
) -> TrendSeries {
    TrendSeries {
        historical: historical_series(year, total),
        forecast: forecast_series(year, total, growth_rate, prediction),
    }
}
