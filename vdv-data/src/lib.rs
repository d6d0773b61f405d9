//! Datasets and record types for the Vietnam data-visualization apps.
//!
//! Each chart app consumes one of the public datasets handled here:
//! the Vietnamese province statistics CSV, the JHU CSSE global COVID-19
//! confirmed-case time series, the per-province COVID case-count CSV, and
//! the province-boundary GeoJSON. Column headers in these files vary across
//! revisions (English and Vietnamese spellings both occur), so all parsing
//! goes through the alias-based normalizer in [`normalize`].

pub mod covid;
#[cfg(feature = "api")]
pub mod fetch;
pub mod geo;
pub mod normalize;
pub mod province;
