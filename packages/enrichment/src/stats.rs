//! Dataset-wide statistics over enriched regions.

use std::collections::{BTreeMap, BTreeSet};

use food_map_expenditure_models::{
    ClusterGroup, DatasetOverview, DatasetStatistics, EnrichedRegion, ExpenditureSummary,
    GroupingCount,
};

/// Computes overview counts, cluster and regional distributions, and
/// expenditure aggregates. An empty slice yields all-zero statistics.
#[must_use]
pub fn dataset_statistics(regions: &[EnrichedRegion]) -> DatasetStatistics {
    let groupings: BTreeSet<&str> = regions.iter().map(|r| r.province.as_str()).collect();
    let clusters: BTreeSet<i32> = regions.iter().map(|r| r.cluster_id).collect();
    let years: BTreeSet<i32> = regions
        .iter()
        .filter_map(|r| r.historical_data.last().map(|p| p.year))
        .collect();

    let mut cluster_distribution: BTreeMap<ClusterGroup, usize> =
        ClusterGroup::all().iter().map(|g| (*g, 0)).collect();
    for region in regions {
        *cluster_distribution.entry(region.cluster_group).or_default() += 1;
    }

    DatasetStatistics {
        overview: DatasetOverview {
            total_regions: regions.len(),
            total_groupings: groupings.len(),
            total_clusters: clusters.len(),
            years_covered: years.into_iter().collect(),
        },
        cluster_distribution,
        regional_distribution: regional_distribution(regions),
        expenditure_summary: expenditure_summary(regions),
    }
}

/// Regions per grouping with mean fruit and vegetable expenditure, by
/// descending count then ascending name.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn regional_distribution(regions: &[EnrichedRegion]) -> Vec<GroupingCount> {
    let mut totals: BTreeMap<&str, (usize, f64, f64)> = BTreeMap::new();
    for region in regions {
        let entry = totals.entry(region.province.as_str()).or_default();
        entry.0 += 1;
        entry.1 += region.expenditure_fruit;
        entry.2 += region.expenditure_veg;
    }

    let mut distribution: Vec<GroupingCount> = totals
        .into_iter()
        .map(|(grouping, (count, fruit, veg))| GroupingCount {
            grouping: grouping.to_string(),
            count,
            avg_fruit: fruit / count as f64,
            avg_veg: veg / count as f64,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.grouping.cmp(&b.grouping)));
    distribution
}

#[allow(clippy::cast_precision_loss)]
fn expenditure_summary(regions: &[EnrichedRegion]) -> ExpenditureSummary {
    if regions.is_empty() {
        return ExpenditureSummary {
            avg_fruit: 0.0,
            avg_veg: 0.0,
            max_fruit: 0.0,
            max_veg: 0.0,
            min_fruit: 0.0,
            min_veg: 0.0,
        };
    }

    let n = regions.len() as f64;
    let fruit = regions.iter().map(|r| r.expenditure_fruit);
    let veg = regions.iter().map(|r| r.expenditure_veg);

    ExpenditureSummary {
        avg_fruit: fruit.clone().sum::<f64>() / n,
        avg_veg: veg.clone().sum::<f64>() / n,
        max_fruit: fruit.clone().fold(f64::NEG_INFINITY, f64::max),
        max_veg: veg.clone().fold(f64::NEG_INFINITY, f64::max),
        min_fruit: fruit.fold(f64::INFINITY, f64::min),
        min_veg: veg.fold(f64::INFINITY, f64::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich_record;
    use food_map_expenditure_models::RawRecord;

    fn region(place: &str, province: &str, fruit: f64, veg: f64, label: &str, cluster: i32) -> EnrichedRegion {
        enrich_record(
            &RawRecord {
                place: place.to_string(),
                year: 2024,
                region: province.to_string(),
                fruit_expenditure: fruit,
                vegetable_expenditure: veg,
                cluster,
                cluster_label: label.to_string(),
                cluster_category: None,
            },
            None,
        )
    }

    #[test]
    fn empty_input_is_all_zero() {
        let stats = dataset_statistics(&[]);
        assert_eq!(stats.overview.total_regions, 0);
        assert!(stats.overview.years_covered.is_empty());
        assert!(stats.regional_distribution.is_empty());
        assert_eq!(stats.cluster_distribution.values().sum::<usize>(), 0);
        assert!(stats.expenditure_summary.max_fruit.abs() < f64::EPSILON);
    }

    #[test]
    fn computes_distributions_and_aggregates() {
        let regions = vec![
            region("Badung", "Bali", 13_811.0, 16_137.0, "Low Expenditure", 0),
            region("Bangli", "Bali", 17_278.0, 15_426.0, "Low Expenditure", 0),
            region("Dogiyai", "Papua", 17_795.0, 55_758.0, "High Expenditure", 2),
            region("Jayapura", "Papua", 5_247.0, 15_183.0, "Balanced Expenditure", 1),
            region("Kota Medan", "Sumatera Utara", 9_739.0, 18_265.0, "Low Expenditure", 0),
        ];

        let stats = dataset_statistics(&regions);

        assert_eq!(stats.overview.total_regions, 5);
        assert_eq!(stats.overview.total_groupings, 3);
        assert_eq!(stats.overview.total_clusters, 3);
        assert_eq!(stats.overview.years_covered, vec![2024]);

        assert_eq!(stats.cluster_distribution[&ClusterGroup::Low], 3);
        assert_eq!(stats.cluster_distribution[&ClusterGroup::Medium], 1);
        assert_eq!(stats.cluster_distribution[&ClusterGroup::High], 1);

        let order: Vec<(&str, usize)> = stats
            .regional_distribution
            .iter()
            .map(|g| (g.grouping.as_str(), g.count))
            .collect();
        assert_eq!(order, vec![("Bali", 2), ("Papua", 2), ("Sumatera Utara", 1)]);

        let bali = &stats.regional_distribution[0];
        assert!((bali.avg_fruit - 15_544.5).abs() < 1e-9);
        assert!((bali.avg_veg - 15_781.5).abs() < 1e-9);
        let medan = &stats.regional_distribution[2];
        assert!((medan.avg_fruit - 9_739.0).abs() < 1e-9);
        assert!((medan.avg_veg - 18_265.0).abs() < 1e-9);

        let summary = stats.expenditure_summary;
        assert!((summary.max_fruit - 17_795.0).abs() < 1e-9);
        assert!((summary.min_fruit - 5_247.0).abs() < 1e-9);
        assert!((summary.max_veg - 55_758.0).abs() < 1e-9);
        assert!((summary.min_veg - 15_183.0).abs() < 1e-9);
        assert!((summary.avg_fruit - 12_774.0).abs() < 1e-9);
    }
}
