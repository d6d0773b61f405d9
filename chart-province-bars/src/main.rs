//! Horizontal Bar Chart of GRDP by Province
//!
//! The one interactive display: the chart opens with the first 20 provinces
//! of the dataset (shown GRDP-descending) and the user can reveal more,
//! remove the most recent, or re-sort under four criteria. All chart state
//! lives in a [`DisplayController`]; the D3 script only receives the
//! working set, keyed by province name, and animates the enter/update/exit
//! transitions.
//!
//! Data flow:
//! 1. `vdv-data` embeds the province statistics CSV at compile time.
//! 2. On mount, the CSV is normalized and the controller is built.
//! 3. Every interaction mutates the controller, logs the keyed render plan,
//!    and re-invokes the D3 bar renderer through the JS bridge.

use dioxus::prelude::*;
use vdv_chart_ui::components::{
    AddRemoveControls, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, SortSelector,
};
use vdv_chart_ui::js_bridge;
use vdv_chart_ui::state::AppState;
use vdv_data::province::{grdp_records, parse_provinces_csv, CSV_PROVINCES};
use vdv_viz::controller::DisplayController;
use vdv_viz::sort::SortCriterion;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "province-bars-chart";

/// How many provinces the chart opens with.
const INITIAL_COUNT: usize = 20;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("province-bars-root"))
        .launch(App);
}

/// Serialize the working set and hand it to the D3 bar renderer. Skips the
/// JS call when the displayed bars are unchanged, as when the active sort
/// criterion is re-selected.
fn render_working_set(ctl: &mut DisplayController) {
    let plan = match ctl.render_plan() {
        Some(plan) => plan,
        None => return,
    };
    log::info!(
        "bars render ({}): {} enter, {} update, {} exit",
        ctl.criterion().value(),
        plan.enter.len(),
        plan.update.len(),
        plan.exit.len()
    );

    let data_json = serde_json::to_string(ctl.working_set()).unwrap_or_default();
    let config_json = serde_json::json!({
        "xLabel": "GRDP in VND (million VND/person/year)",
        // Color domain over the currently displayed set, not the full
        // dataset: bars recolor relative to what is on screen.
        "colorDomain": ctl.metric_extent().map(|(lo, hi)| [lo, hi]),
    })
    .to_string();

    js_bridge::render_bar_chart(CHART_CONTAINER_ID, &data_json, &config_json);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut controller: Signal<Option<DisplayController>> = use_signal(|| None);

    // Parse the embedded CSV and draw the opening view, once on mount.
    use_effect(move || {
        js_bridge::init_charts();
        match parse_provinces_csv(CSV_PROVINCES) {
            Ok(provinces) if !provinces.is_empty() => {
                let mut ctl = DisplayController::new(grdp_records(&provinces), INITIAL_COUNT);
                render_working_set(&mut ctl);
                controller.set(Some(ctl));
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

    let on_add = move |_| {
        controller.with_mut(|opt| {
            if let Some(ctl) = opt {
                if ctl.add() {
                    render_working_set(ctl);
                }
            }
        });
    };

    let on_remove = move |_| {
        controller.with_mut(|opt| {
            if let Some(ctl) = opt {
                if ctl.remove().is_some() {
                    render_working_set(ctl);
                }
            }
        });
    };

    let on_sort_change = move |value: String| {
        state.sort_mode.set(value.clone());
        controller.with_mut(|opt| {
            if let Some(ctl) = opt {
                ctl.set_criterion(SortCriterion::from_value(&value));
                render_working_set(ctl);
            }
        });
    };

    let (remaining, can_remove) = controller
        .read()
        .as_ref()
        .map(|ctl| (ctl.remaining(), !ctl.working_set().is_empty()))
        .unwrap_or((0, false));

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Horizontal Bar Chart of GRDP in VND by Province".to_string(),
                dataset_description: "Vietnamese province statistics (GRDP per person per year)".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin: 8px 0; display: flex; gap: 20px; align-items: center;",
                    AddRemoveControls {
                        remaining: remaining,
                        can_remove: can_remove,
                        on_add: on_add,
                        on_remove: on_remove,
                    }
                    SortSelector {
                        value: (state.sort_mode)(),
                        on_change: on_sort_change,
                    }
                }
                ChartContainer {
                    id: CHART_CONTAINER_ID.to_string(),
                    min_height: 650,
                }
            }
        }
    }
}
