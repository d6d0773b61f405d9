//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals shared by the chart apps into a
//! single struct provided via `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared application state for the chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Sort criterion value for the bar chart ("original", "name-asc", ...)
    pub sort_mode: Signal<String>,
    /// Focus date for the multi-line chart (YYYY-MM-DD)
    pub focus_date: Signal<String>,
    /// Countries shown by the multi-line chart
    pub selected_countries: Signal<Vec<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            sort_mode: Signal::new("original".to_string()),
            focus_date: Signal::new(String::new()),
            selected_countries: Signal::new(vec![
                "Vietnam".to_string(),
                "US".to_string(),
                "France".to_string(),
            ]),
        }
    }
}
