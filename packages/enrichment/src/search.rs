//! Place-name search over enriched regions.

use food_map_expenditure_models::EnrichedRegion;

/// Returns regions whose name contains `query`, ignoring case. An empty
/// query matches nothing.
#[must_use]
pub fn search_regions<'a>(regions: &'a [EnrichedRegion], query: &str) -> Vec<&'a EnrichedRegion> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    regions
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
