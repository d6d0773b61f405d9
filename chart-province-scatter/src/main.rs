//! Population vs GRDP Scatter Plot
//!
//! Single-pass renderer: the embedded province CSV is normalized once on
//! mount and drawn once. Circle area is proportional to province area and
//! fill is a quantile blues scale over population density; both fall back
//! to defaults for rows where those optional columns failed to parse.

use dioxus::prelude::*;
use vdv_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use vdv_chart_ui::js_bridge;
use vdv_chart_ui::state::AppState;
use vdv_data::province::{parse_provinces_csv, CSV_PROVINCES};

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "province-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("province-scatter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::init_charts();
        match parse_provinces_csv(CSV_PROVINCES) {
            Ok(provinces) if !provinces.is_empty() => {
                let data_json = serde_json::to_string(&provinces).unwrap_or_default();
                let config_json = serde_json::json!({
                    "xField": "population",
                    "yField": "grdp",
                    "rField": "area",
                    "colorField": "density",
                    "nameField": "name",
                    "xLabel": "POPULATION (thousand people)",
                    "yLabel": "GRDP-VND",
                    "tooltipFields": [
                        { "label": "Population", "field": "population" },
                        { "label": "GRDP-VND", "field": "grdp" },
                        { "label": "Area (km2)", "field": "area" },
                        { "label": "Density (/km2)", "field": "density" },
                    ],
                })
                .to_string();
                js_bridge::render_scatter_chart(CHART_CONTAINER_ID, &data_json, &config_json);
                state.loading.set(false);
            }
            Ok(_) => {
                state
                    .error_msg
                    .set(Some("No usable rows in the province dataset.".to_string()));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("CSV load error: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load province data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Population vs GRDP by Province".to_string(),
                dataset_description: "Vietnamese province statistics; circle area = province area, color = density".to_string(),
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
