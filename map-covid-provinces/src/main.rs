//! Province Choropleth of Confirmed Cases
//!
//! Joins the per-province case-count CSV onto the boundary GeoJSON by the
//! numeric GSO code (`properties.Ma`) in Rust, then hands the enriched
//! FeatureCollection to the D3 map script. Provinces without a matching
//! case row keep their properties and render in neutral gray.

use dioxus::prelude::*;
use vdv_chart_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner};
use vdv_chart_ui::js_bridge;
use vdv_chart_ui::state::AppState;
use vdv_data::covid::{parse_province_cases, CSV_PROVINCE_CASES};
use vdv_data::geo::{join_cases, GEOJSON_PROVINCES};

/// DOM id for the D3 map container div.
const CHART_CONTAINER_ID: &str = "covid-province-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-map-root"))
        .launch(App);
}

fn load_and_render() -> anyhow::Result<()> {
    let cases = parse_province_cases(CSV_PROVINCE_CASES)?;
    let mut geojson: serde_json::Value = serde_json::from_str(GEOJSON_PROVINCES)?;
    let matched = join_cases(&mut geojson, &cases);
    log::info!(
        "choropleth: joined {} of {} case rows onto the map",
        matched,
        cases.len()
    );

    let config_json = serde_json::json!({
        "width": 800,
        "height": 800,
    })
    .to_string();
    js_bridge::render_choropleth_map(CHART_CONTAINER_ID, &geojson.to_string(), &config_json);
    Ok(())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        js_bridge::init_charts();
        match load_and_render() {
            Ok(()) => state.loading.set(false),
            Err(e) => {
                log::error!("map load error: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load map data: {}", e)));
                state.loading.set(false);
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "COVID-19 Confirmed Cases by Province".to_string(),
                dataset_description: "Case counts joined to province boundaries by GSO code; scroll to zoom".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: 820,
                }
            }
        }
    }
}
