//! Mount point for the D3-rendered charts.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the render bridge polls for before drawing into it
    pub id: String,
    /// Minimum height in pixels; the bar chart and the map ask for more
    /// than the scatter default
    #[props(default = 520)]
    pub min_height: u32,
}

/// Empty div the chart scripts select by id and fill with an svg.
///
/// The div carries no content of its own: the render bridge waits until
/// this id exists in the document, then hands it to the D3 script.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "position: relative; width: 100%; min-height: {}px;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
