//! Deterministic coordinate estimation.
//!
//! The expenditure data carries no coordinates, so each place is scattered
//! around its province center by a jitter derived from a hash of its name.
//! The same `(province, place)` pair always lands on the same point.

use food_map_expenditure_models::Coordinates;

use crate::provinces::province_center_or_fallback;

/// Default jitter spread in degrees. Points land within half of this on
/// each axis.
pub const DEFAULT_SPREAD_DEGREES: f64 = 0.8;

/// 32-bit polynomial string hash (`h * 31 + unit`) over UTF-16 code units,
/// wrapping on overflow.
///
/// Hashing UTF-16 units rather than bytes keeps the result identical to
/// the hash the web frontend computes for the same name.
#[must_use]
pub fn place_hash(name: &str) -> i32 {
    name.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Estimates coordinates for `place` within `province` using
/// [`DEFAULT_SPREAD_DEGREES`].
#[must_use]
pub fn estimate_coordinates(province: &str, place: &str) -> Coordinates {
    estimate_coordinates_with_spread(province, place, DEFAULT_SPREAD_DEGREES)
}

/// Estimates coordinates for `place` within `province`.
///
/// The low 16 bits of the place hash shift the latitude and the next 16
/// bits shift the longitude, each by `(bits / 65536 - 0.5) * spread`.
/// Unknown provinces are placed around the fallback center.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn estimate_coordinates_with_spread(province: &str, place: &str, spread: f64) -> Coordinates {
    let center = province_center_or_fallback(province);
    let hash = place_hash(place);

    let seed_lat = f64::from(hash & 0xFFFF) / 65536.0;
    let seed_lng = f64::from((hash >> 16) & 0xFFFF) / 65536.0;

    log::trace!("estimate_coordinates: {province}/{place} hash={hash}");

    // Unfused multiply-add keeps results bit-identical to the frontend.
    Coordinates {
        lat: center.lat + (seed_lat - 0.5) * spread,
        lng: center.lng + (seed_lng - 0.5) * spread,
    }
}
