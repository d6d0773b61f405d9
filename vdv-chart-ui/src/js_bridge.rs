//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js` and are evaluated as
//! globals (no ES modules), exposed via `window.*`. This module provides
//! safe Rust wrappers that serialize data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VDV JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBarChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [
        TOOLTIP_JS,
        SCATTER_CHART_JS,
        BAR_CHART_JS,
        MULTI_LINE_CHART_JS,
        CHOROPLETH_MAP_JS,
    ]
    .join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__vdvChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__vdvChartScripts);
                    delete window.__vdvChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__vdvChartsReady = true;
                    console.log('VDV charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the named render function and the container both exist, then
/// call it with the serialized data and config.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vdvChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[VDV] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the province scatter / covid scatter chart.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderScatterChart", container_id, data_json, config_json);
}

/// Render the incremental horizontal bar chart.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render the multi-line time-series chart.
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMultiLineChart", container_id, data_json, config_json);
}

/// Render the province choropleth map.
pub fn render_choropleth_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderChoroplethMap", container_id, data_json, config_json);
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
