//! Reusable Dioxus RSX components for the chart apps.

mod add_remove_controls;
mod chart_container;
mod chart_header;
mod error_display;
mod focus_date_picker;
mod loading_spinner;
mod sort_selector;

pub use add_remove_controls::AddRemoveControls;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use focus_date_picker::FocusDatePicker;
pub use loading_spinner::LoadingSpinner;
pub use sort_selector::SortSelector;
