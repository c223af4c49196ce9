//! Reference centers for Indonesian provinces.
//!
//! Each entry is the approximate geographic center of a province. The
//! [`FALLBACK_PROVINCE`] entry is used for any grouping not listed here
//! and must stay in [`PROVINCE_CENTERS`].

use food_map_expenditure_models::Coordinates;

/// Grouping name whose center is used for unrecognized groupings.
pub const FALLBACK_PROVINCE: &str = "Lainnya";

/// Province name → center coordinates.
pub const PROVINCE_CENTERS: &[(&str, Coordinates)] = &[
    ("Aceh", c(4.6951, 96.7494)),
    ("Sumatera Utara", c(2.1154, 99.5451)),
    ("Sumatera Barat", c(-0.7399, 100.8000)),
    ("Riau", c(0.2933, 101.7068)),
    ("Jambi", c(-1.4852, 102.4381)),
    ("Sumatera Selatan", c(-3.3194, 104.9144)),
    ("Bengkulu", c(-3.5778, 102.3464)),
    ("Lampung", c(-4.5586, 105.4068)),
    ("Kepulauan Bangka Belitung", c(-2.7411, 106.4406)),
    ("Bangka Belitung", c(-2.7411, 106.4406)),
    ("Kepulauan Riau", c(3.9164, 108.1901)),
    ("DKI Jakarta", c(-6.2088, 106.8456)),
    ("Jawa Barat", c(-6.9175, 107.6191)),
    ("Jawa Tengah", c(-7.1510, 110.1403)),
    ("DI Yogyakarta", c(-7.7956, 110.3695)),
    ("Jawa Timur", c(-7.5360, 112.2384)),
    ("Banten", c(-6.4058, 106.0640)),
    ("Bali", c(-8.3405, 115.0920)),
    ("Nusa Tenggara Barat", c(-8.6529, 117.3616)),
    ("Nusa Tenggara Timur", c(-8.6574, 121.0794)),
    ("Kalimantan Barat", c(-0.2787, 111.4753)),
    ("Kalimantan Tengah", c(-1.6815, 113.3824)),
    ("Kalimantan Selatan", c(-3.0926, 115.2838)),
    ("Kalimantan Timur", c(0.5387, 116.4194)),
    ("Kalimantan Utara", c(3.0731, 116.0414)),
    ("Sulawesi Utara", c(0.6247, 123.9750)),
    ("Sulawesi Tengah", c(-1.4300, 121.4456)),
    ("Sulawesi Selatan", c(-3.6687, 119.9740)),
    ("Sulawesi Tenggara", c(-4.1449, 122.1746)),
    ("Gorontalo", c(0.6999, 122.4467)),
    ("Sulawesi Barat", c(-2.8441, 119.2321)),
    ("Maluku", c(-3.2385, 130.1453)),
    ("Maluku Utara", c(1.5709, 127.8087)),
    ("Papua Barat", c(-1.3361, 133.1747)),
    ("Papua", c(-4.2699, 138.0804)),
    (FALLBACK_PROVINCE, c(-5.0, 119.0)),
];

const fn c(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

/// Looks up the center of a province by exact name.
#[must_use]
pub fn province_center(name: &str) -> Option<Coordinates> {
    PROVINCE_CENTERS
        .iter()
        .find(|(province, _)| *province == name)
        .map(|(_, center)| *center)
}

/// Returns the center of `name`, or the [`FALLBACK_PROVINCE`] center when
/// the province is unknown.
#[must_use]
pub fn province_center_or_fallback(name: &str) -> Coordinates {
    province_center(name).unwrap_or(FALLBACK_CENTER)
}

const FALLBACK_CENTER: Coordinates = c(-5.0, 119.0);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn fallback_entry_exists() {
        assert_eq!(province_center(FALLBACK_PROVINCE), Some(FALLBACK_CENTER));
    }

    #[test]
    fn province_names_are_unique() {
        let mut seen = BTreeSet::new();
        for (name, _) in PROVINCE_CENTERS {
            assert!(seen.insert(*name), "Duplicate province: {name}");
        }
    }

    #[test]
    fn unknown_province_uses_fallback() {
        let center = province_center_or_fallback("Atlantis");
        assert!((center.lat - -5.0).abs() < f64::EPSILON);
        assert!((center.lng - 119.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(province_center("bali").is_none());
        assert!(province_center("Bali").is_some());
    }
}
