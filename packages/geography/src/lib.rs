#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geographic helpers for the regional expenditure dataset.
//!
//! The dataset identifies places only by name and province, so this crate
//! provides:
//!
//! - [`provinces`]: reference centers for every Indonesian province plus a
//!   fallback entry.
//! - [`coordinates`]: a deterministic, hash-based scatter of places around
//!   their province center. This is not geocoding; points are stable
//!   approximations for map display.
//! - [`filter`]: island-level scopes (`Jawa`, `Sumatera`, ...) used to
//!   narrow a dataset before enrichment.

pub mod coordinates;
pub mod filter;
pub mod provinces;

pub use coordinates::estimate_coordinates;
pub use filter::{RecordSelection, RegionScope, filter_records, select_records};
