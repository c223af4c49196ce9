//! Island-level grouping of provinces.
//!
//! Users pick a scope such as `"Jawa"` or `"Sumatera"`; each scope expands
//! to the set of province-name fragments that belong to it. Matching is a
//! case-sensitive substring test against the record's grouping field.
//!
//! A [`RecordSelection`] can further pin the numeric cluster id and the
//! observation year.

use food_map_expenditure_models::RawRecord;

/// Token meaning "no filter".
pub const ALL_TOKEN: &str = "All";

/// Province fragments that make up Java.
pub const JAWA_MEMBERS: &[&str] = &["Jawa", "Banten", "Jakarta", "Yogyakarta"];

/// Province fragments that make up Sumatra.
pub const SUMATERA_MEMBERS: &[&str] = &["Sumatera", "Aceh", "Riau", "Jambi", "Bengkulu", "Lampung"];

/// A grouping selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionScope {
    /// Every record.
    All,
    /// Java and its special regions.
    Jawa,
    /// Sumatra and its provinces.
    Sumatera,
    /// Any grouping containing the given fragment.
    Containing(String),
}

impl RegionScope {
    /// Interprets a selection token. `None`, an empty token and `"All"`
    /// all mean no filtering.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("" | ALL_TOKEN) => Self::All,
            Some("Jawa") => Self::Jawa,
            Some("Sumatera") => Self::Sumatera,
            Some(other) => Self::Containing(other.to_string()),
        }
    }

    /// Whether a record with this grouping belongs to the scope.
    #[must_use]
    pub fn matches(&self, grouping: &str) -> bool {
        match self {
            Self::All => true,
            Self::Jawa => JAWA_MEMBERS.iter().any(|m| grouping.contains(m)),
            Self::Sumatera => SUMATERA_MEMBERS.iter().any(|m| grouping.contains(m)),
            Self::Containing(fragment) => grouping.contains(fragment.as_str()),
        }
    }
}

impl std::fmt::Display for RegionScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{ALL_TOKEN}"),
            Self::Jawa => write!(f, "Jawa"),
            Self::Sumatera => write!(f, "Sumatera"),
            Self::Containing(fragment) => write!(f, "{fragment}"),
        }
    }
}

/// Exact-match constraints on cluster id and observation year. Unset
/// fields match every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordSelection {
    /// Numeric cluster id (`Cluster`).
    pub cluster: Option<i32>,
    /// Observation year (`Tahun`).
    pub year: Option<i32>,
}

impl RecordSelection {
    /// Selection restricted to one cluster id.
    #[must_use]
    pub const fn cluster(cluster: i32) -> Self {
        Self {
            cluster: Some(cluster),
            year: None,
        }
    }

    /// Whether `record` satisfies every set constraint.
    #[must_use]
    pub fn matches(&self, record: &RawRecord) -> bool {
        self.cluster.is_none_or(|c| record.cluster == c)
            && self.year.is_none_or(|y| record.year == y)
    }
}

/// Returns the records inside `scope`, preserving input order.
///
/// An empty result is valid and simply means nothing matched.
#[must_use]
pub fn filter_records<'a>(records: &'a [RawRecord], scope: &RegionScope) -> Vec<&'a RawRecord> {
    select_records(records, scope, RecordSelection::default())
}

/// Like [`filter_records`], additionally applying `selection`.
#[must_use]
pub fn select_records<'a>(
    records: &'a [RawRecord],
    scope: &RegionScope,
    selection: RecordSelection,
) -> Vec<&'a RawRecord> {
    let kept: Vec<&RawRecord> = records
        .iter()
        .filter(|r| scope.matches(&r.region) && selection.matches(r))
        .collect();
    log::debug!(
        "select_records: scope={scope} selection={selection:?} kept {}/{}",
        kept.len(),
        records.len()
    );
    kept
}
