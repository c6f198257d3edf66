//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/scatter-chart.js`, are
//! evaluated as globals (no ES modules) and exposed via `window.*`. This module
//! serializes chart data and configuration and calls those globals. Point
//! clicks travel back to Rust through [`selection_listener`].

use dioxus::document::{self, Eval};
use serde::Serialize;
use sorb_core::{AxisLabels, OverlayColumns};

static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");

/// DOM id of the loading chart container.
pub const LOADING_CHART_ID: &str = "loading-chart";
/// DOM id of the Henry constant chart container.
pub const HENRY_CHART_ID: &str = "henry-chart";
/// DOM id of the working-capacity chart container.
pub const CAPACITY_CHART_ID: &str = "capacity-chart";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('SORB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Encode a string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The scripts are evaluated at global scope via indirect `eval` once D3 is
/// ready, then each function is promoted to `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!("window.__sorbChartScripts = {};", js_string(SCATTER_CHART_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__sorbChartsReady) return;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__sorbChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__sorbChartScripts);
                    delete window.__sorbChartScripts;
                    if (typeof renderScatterChart !== 'undefined') window.renderScatterChart = renderScatterChart;
                    if (typeof renderErrorOverlay !== 'undefined') window.renderErrorOverlay = renderErrorOverlay;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.initTooltip();
                    window.__sorbChartsReady = true;
                    console.log('SORB charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Configuration consumed by `renderScatterChart`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterChartConfig {
    pub title: String,
    /// Column names of the view to plot.
    pub x_field: &'static str,
    pub y_field: &'static str,
    pub z_field: &'static str,
    pub x_label: String,
    pub y_label: String,
    pub log_scale: bool,
    /// Fixed axis range; `None` fits the axis to the data.
    pub x_domain: Option<(f64, f64)>,
    pub y_domain: Option<(f64, f64)>,
    pub width: u32,
    pub height: u32,
}

impl ScatterChartConfig {
    /// Amount adsorbed chart: `x0`/`y0`, linear axes.
    pub fn loading(labels: &AxisLabels) -> Self {
        Self {
            title: "Amount adsorbed".to_string(),
            x_field: "x0",
            y_field: "y0",
            z_field: "z0",
            x_label: labels.loading_x.clone(),
            y_label: labels.loading_y.clone(),
            log_scale: false,
            x_domain: Some((0.0, 12.0)),
            y_domain: Some((0.0, 12.0)),
            width: 500,
            height: 500,
        }
    }

    /// Initial Henry constant chart: `x1`/`y1`, log-log axes.
    pub fn henry(labels: &AxisLabels) -> Self {
        Self {
            title: "Initial Henry constant".to_string(),
            x_field: "x1",
            y_field: "y1",
            z_field: "z1",
            x_label: labels.henry_x.clone(),
            y_label: labels.henry_y.clone(),
            log_scale: true,
            x_domain: Some((1e-2, 1e5)),
            y_domain: Some((1e-2, 1e5)),
            width: 500,
            height: 500,
        }
    }

    /// Working capacity chart: `x`/`y` of the capacity view, linear axes
    /// fitted to the data since capacities can be negative.
    pub fn capacity(labels: &AxisLabels) -> Self {
        Self {
            title: "Working capacity in selected range".to_string(),
            x_field: "x",
            y_field: "y",
            z_field: "z",
            x_label: labels.loading_x.clone(),
            y_label: labels.loading_y.clone(),
            log_scale: false,
            x_domain: None,
            y_domain: None,
            width: 500,
            height: 500,
        }
    }
}

/// Start and end coordinates of the error-bar segments on one chart.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ChartSegments<'a> {
    pub x0: &'a [f64],
    pub y0: &'a [f64],
    pub x1: &'a [f64],
    pub y1: &'a [f64],
}

impl<'a> ChartSegments<'a> {
    pub fn loading(columns: &'a OverlayColumns) -> Self {
        Self {
            x0: &columns.x00,
            y0: &columns.y00,
            x1: &columns.x01,
            y1: &columns.y01,
        }
    }

    pub fn henry(columns: &'a OverlayColumns) -> Self {
        Self {
            x0: &columns.x10,
            y0: &columns.y10,
            x1: &columns.x11,
            y1: &columns.y11,
        }
    }
}

/// Render a scatter chart of view columns.
///
/// Uses a polling loop to wait for the chart scripts and the container DOM
/// element before rendering.
pub fn render_scatter_chart(container_id: &str, data_json: &str, config_json: &str) {
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__sorbChartsReady &&
                    typeof window.renderScatterChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderScatterChart('{container_id}', {data}, {config});
                    }} catch(e) {{ console.error('[SORB] renderScatterChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw (or clear, with empty segments) the error bars on a rendered chart
/// and highlight the selected point.
pub fn render_error_overlay(container_id: &str, segments: &ChartSegments<'_>, selected: Option<usize>) {
    let segments = js_string(&serde_json::to_string(segments).unwrap_or_default());
    let selected = selected.map_or("null".to_string(), |i| i.to_string());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                var el = document.getElementById('{container_id}');
                if (window.__sorbChartsReady && el && el.__sorbChart) {{
                    clearInterval(poll);
                    try {{
                        window.renderErrorOverlay('{container_id}', {segments}, {selected});
                    }} catch(e) {{ console.error('[SORB] renderErrorOverlay error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

/// Channel receiving point selections (`Vec<usize>`) reported by the charts.
///
/// The returned [`Eval`] must be kept alive; read it with
/// `eval.recv::<Vec<usize>>().await`.
pub fn selection_listener() -> Eval {
    document::eval(
        r#"
        window.__sorbSelect = function(indices) { dioxus.send(indices); };
        await new Promise(function() {});
        "#,
    )
}
