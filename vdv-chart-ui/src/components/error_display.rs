//! Error banner shown in place of a chart that could not be drawn.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    /// What went wrong, already phrased for the user (the apps include
    /// the dataset name and the parse error)
    pub message: String,
}

/// Red-accented banner replacing the chart area on a load failure.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin: 8px 0; padding: 10px 14px; border-left: 4px solid #C62828; background: #FBE9E7; color: #B71C1C; font-size: 14px;",
            "{props.message}"
        }
    }
}
