//! Global Confirmed Cases Scatter
//!
//! Plots every place in the confirmed-case time series at its lat/long,
//! with circle opacity scaled by the case count on one fixed date column.
//! Single-pass: parse once on mount, draw once, hover tooltips only.

use dioxus::prelude::*;
use vdv_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use vdv_chart_ui::js_bridge;
use vdv_chart_ui::state::AppState;
use vdv_data::covid::{parse_places_at, CSV_CONFIRMED_GLOBAL};

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "covid-scatter-chart";

/// The date column to plot, verbatim from the wide CSV's header.
const DATE_COLUMN: &str = "4/5/20";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-scatter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::init_charts();
        match parse_places_at(CSV_CONFIRMED_GLOBAL, DATE_COLUMN) {
            Ok(places) if !places.is_empty() => {
                let data_json = serde_json::to_string(&places).unwrap_or_default();
                let config_json = serde_json::json!({
                    "xField": "long",
                    "yField": "lat",
                    "opacityField": "cases",
                    "nameField": "country",
                    "radius": 6,
                    "fill": "#0b4fa8",
                    "xLabel": "Longitude",
                    "yLabel": "Latitude",
                    "tooltipFields": [
                        { "label": "Latitude", "field": "lat" },
                        { "label": "Longitude", "field": "long" },
                        { "label": "Confirmed cases", "field": "cases" },
                    ],
                })
                .to_string();
                js_bridge::render_scatter_chart(CHART_CONTAINER_ID, &data_json, &config_json);
                state.loading.set(false);
            }
            Ok(_) => {
                state
                    .error_msg
                    .set(Some("No rows with usable coordinates.".to_string()));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("CSV load error: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load case data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: format!("Confirmed COVID-19 Cases on {}", DATE_COLUMN),
                dataset_description: "JHU CSSE global time series; opacity = case count".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                }
            }
        }
    }
}
