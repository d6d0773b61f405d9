//! Chart-state logic shared by the chart apps.
//!
//! Everything here is synchronous and rendering-free: the incremental
//! bar-chart controller, the sort criteria, the keyed enter/update/exit
//! reconciliation, and the nearest-sample series search behind the
//! multi-line focus markers. The D3 side only ever receives the results.

pub mod controller;
pub mod reconcile;
pub mod series;
pub mod sort;
