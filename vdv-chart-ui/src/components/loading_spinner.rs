//! Placeholder shown while the embedded datasets are being parsed.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Text under the indicator
    #[props(default = String::from("Preparing chart data..."))]
    pub message: String,
}

/// Centered text placeholder filling the chart area during parsing. The
/// embedded CSVs parse fast enough that this rarely survives a frame, but
/// it keeps the layout from jumping when the chart appears.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 120px; color: #607D8B; font-size: 14px;",
            "{props.message}"
        }
    }
}
