//! Chart header component with title and dataset attribution.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// One-line description of the dataset behind the chart
    #[props(default = String::new())]
    pub dataset_description: String,
}

/// Header for chart sections showing title and optional dataset note.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.dataset_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Data: {props.dataset_description}"
                }
            }
        }
    }
}
