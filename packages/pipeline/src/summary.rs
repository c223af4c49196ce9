//! Narrative text attached to every analysis.

use food_map_expenditure_models::DataProvenance;

/// Advisory recommendations. Static text, independent of the data.
pub const RECOMMENDATIONS: [&str; 3] = [
    "Optimalkan distribusi di wilayah dengan pengeluaran tinggi untuk memaksimalkan potensi pasar.",
    "Tingkatkan akses dan keterjangkauan di wilayah dengan pengeluaran rendah untuk mendorong konsumsi.",
    "Perbaiki infrastruktur rantai pasok untuk mengurangi disparitas harga antar wilayah.",
];

/// Summary sentence reporting how many records were acquired and where
/// they came from.
#[must_use]
pub fn compose_summary(record_count: usize, provenance: DataProvenance) -> String {
    format!(
        "Analisis berdasarkan {record_count} kabupaten/kota dari Data Pengeluaran Regional \
         2023-2024 ({provenance}). Dataset menunjukkan variasi signifikan dalam pengeluaran \
         buah dan sayur di berbagai wilayah. Terdapat perbedaan pola konsumsi antara wilayah \
         perkotaan dan perdesaan."
    )
}

/// [`RECOMMENDATIONS`] as owned strings.
#[must_use]
pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(ToString::to_string).collect()
}
