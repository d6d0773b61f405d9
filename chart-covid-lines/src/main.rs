//! Confirmed Cases per Country, Multi-Line
//!
//! One line per selected country over a fixed five-week window. Hovering
//! the chart moves one focus marker per line via the D3 bisector; picking a
//! focus date pins those markers and shows the same nearest-sample lookup
//! computed natively (`vdv_viz::series::nearest_at_or_after`), so the two
//! always agree.

use chrono::NaiveDate;
use dioxus::prelude::*;
use vdv_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FocusDatePicker, LoadingSpinner,
};
use vdv_chart_ui::js_bridge;
use vdv_chart_ui::state::AppState;
use vdv_data::covid::{parse_country_series, CountrySeries, CSV_CONFIRMED_GLOBAL};
use vdv_viz::series::nearest_at_or_after;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "covid-lines-chart";

/// Countries offered by the selection checkboxes.
const CANDIDATE_COUNTRIES: &[&str] = &[
    "Vietnam", "US", "France", "Italy", "Spain", "Germany", "Japan", "Thailand",
];

/// The fixed display window.
const WINDOW_START: (i32, u32, u32) = (2020, 3, 31);
const WINDOW_END: (i32, u32, u32) = (2020, 5, 1);

fn window_start() -> NaiveDate {
    let (y, m, d) = WINDOW_START;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn window_end() -> NaiveDate {
    let (y, m, d) = WINDOW_END;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("covid-lines-root"))
        .launch(App);
}

/// Serialize the series and render, pinning focus markers to `focus_date`
/// when one is set.
fn render_lines(series: &[CountrySeries], focus_date: &str) {
    let data_json = serde_json::to_string(series).unwrap_or_default();
    let pinned = (!focus_date.is_empty()).then_some(focus_date);
    let config_json = serde_json::json!({
        "yLabel": "Number of Confirmed Cases",
        // Fixed per-country colors, palette fallback otherwise.
        "colors": { "Vietnam": "green", "US": "blue", "France": "red" },
        "focusDate": pinned,
    })
    .to_string();
    js_bridge::render_multi_line_chart(CHART_CONTAINER_ID, &data_json, &config_json);
}

/// Nearest sample at or after the focus date, per country.
fn focus_summary(series: &[CountrySeries], focus_date: &str) -> Vec<(String, u32)> {
    let date = match NaiveDate::parse_from_str(focus_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return Vec::new(),
    };
    series
        .iter()
        .filter_map(|s| {
            nearest_at_or_after(&s.points, date).map(|p| (s.country.clone(), p.cases))
        })
        .collect()
}

/// Parse the embedded CSV for the selected countries and redraw.
fn reload(
    selected: &[String],
    focus_date: &str,
    series: &mut Signal<Vec<CountrySeries>>,
    state: &mut AppState,
) {
    let countries: Vec<&str> = selected.iter().map(String::as_str).collect();
    match parse_country_series(CSV_CONFIRMED_GLOBAL, &countries, window_start(), window_end()) {
        Ok(parsed) if !parsed.is_empty() => {
            render_lines(&parsed, focus_date);
            series.set(parsed);
            state.error_msg.set(None);
        }
        Ok(_) => {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            series.set(Vec::new());
            state
                .error_msg
                .set(Some("No series for the selected countries.".to_string()));
        }
        Err(e) => {
            log::error!("CSV load error: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load case data: {}", e)));
        }
    }
    state.loading.set(false);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut series: Signal<Vec<CountrySeries>> = use_signal(Vec::new);

    use_effect(move || {
        js_bridge::init_charts();
        let selected = state.selected_countries.peek().clone();
        reload(&selected, "", &mut series, &mut state);
    });

    let on_focus_change = move |value: String| {
        state.focus_date.set(value.clone());
        render_lines(&series.read(), &value);
    };

    let mut on_toggle_country = move |country: String| {
        let mut selected = state.selected_countries.peek().clone();
        match selected.iter().position(|c| *c == country) {
            Some(idx) => {
                selected.remove(idx);
            }
            None => selected.push(country),
        }
        state.selected_countries.set(selected.clone());
        let focus = state.focus_date.peek().clone();
        reload(&selected, &focus, &mut series, &mut state);
    };

    let selected_now = (state.selected_countries)();
    let summary = focus_summary(&series.read(), &(state.focus_date)());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Confirmed COVID-19 Cases Over Time".to_string(),
                dataset_description: "JHU CSSE global time series, 2020-03-31 to 2020-05-01".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin: 8px 0; display: flex; gap: 16px; align-items: center; flex-wrap: wrap;",
                    for country in CANDIDATE_COUNTRIES.iter() {
                        label {
                            style: "font-size: 13px;",
                            input {
                                r#type: "checkbox",
                                checked: selected_now.iter().any(|c| c.as_str() == *country),
                                onchange: {
                                    let country = country.to_string();
                                    move |_| on_toggle_country(country.clone())
                                },
                            }
                            " {country}"
                        }
                    }
                    FocusDatePicker {
                        value: (state.focus_date)(),
                        min: "2020-03-31".to_string(),
                        max: "2020-05-01".to_string(),
                        on_change: on_focus_change,
                    }
                }
                if !summary.is_empty() {
                    div {
                        style: "margin: 4px 0 8px 0; font-size: 13px; color: #37474F;",
                        for (country, cases) in summary.iter() {
                            span {
                                style: "margin-right: 16px;",
                                "{country}: {cases} cases"
                            }
                        }
                    }
                }
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: 540,
                }
            }
        }
    }
}
