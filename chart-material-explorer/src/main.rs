//! Material explorer for gas separations
//!
//! Two linked scatter charts compare adsorbent materials for a pair of
//! gases: amount adsorbed at the pressure chosen with the slider, and the
//! initial Henry constant on log-log axes. Clicking a point highlights the
//! material on both charts, draws its error bars and fills the details panel.
//! A third chart plots each material's working capacity between the two
//! handles of the capacity range, and the material list shows the Henry
//! selectivity `KH2/KH1`.
//!
//! Data flow:
//! 1. `build.rs` copies `materials.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and read
//!    back as a `Dataset`, which seeds the control panel.
//! 4. Widgets and chart clicks dispatch panel events; memos over the panel
//!    re-render the charts when the view or capacity changes and the error
//!    bars when the overlay changes.

use sorb_chart_ui::components::{
    CapacityRangeSlider, ChartContainer, ChartHeader, ErrorDisplay, GasPairSelector,
    LoadingSpinner, MaterialDetailsPanel, MaterialList, PressureSlider,
};
use sorb_chart_ui::js_bridge::{
    self, ChartSegments, ScatterChartConfig, CAPACITY_CHART_ID, HENRY_CHART_ID, LOADING_CHART_ID,
};
use sorb_chart_ui::state::AppState;
use sorb_core::{ControlPanel, DashboardConfig, PanelEvent};
use sorb_db::Database;
use dioxus::prelude::*;
use std::rc::Rc;

/// Material properties for every measured gas.
const MATERIALS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/materials.csv"));

const INSTRUCTIONS: &str = "Select the separation dataset by clicking on the buttons below. \
    Hover over a point to display a tool-tip with material information, \
    click it to focus on a particular material. \
    The loading graph shows the amount adsorbed at the pressure set by the slider below it. \
    The working capacity graph shows the change in loading between the two capacity handles.";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("material-explorer-root"))
        .launch(App);
}

/// Load the embedded CSV and build the control panel on the default preset.
fn load_panel() -> anyhow::Result<ControlPanel> {
    if MATERIALS_CSV.is_empty() {
        anyhow::bail!("no materials data was embedded at build time");
    }
    let db = Database::new()?;
    db.load_materials(MATERIALS_CSV)?;
    let dataset = db.query_dataset()?;
    Ok(ControlPanel::new(Rc::new(dataset), DashboardConfig::default())?)
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    use_hook(js_bridge::init_charts);

    // Initialize dataset and panel on mount
    use_effect(move || {
        match load_panel() {
            Ok(panel) => {
                state.panel.set(Some(panel));
            }
            Err(e) => {
                log::error!("Failed to load materials: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load material data: {}", e)));
            }
        }
        state.loading.set(false);
    });

    // Chart clicks arrive as index lists
    use_future(move || async move {
        let mut listener = js_bridge::selection_listener();
        loop {
            match listener.recv::<Vec<usize>>().await {
                Ok(indices) => {
                    log::info!("[SORB] app: chart selection {:?}", indices);
                    state.dispatch(PanelEvent::SelectPoints(indices));
                }
                Err(e) => {
                    log::error!("[SORB] app: selection channel closed: {:?}", e);
                    break;
                }
            }
        }
    });

    let view = use_memo(move || {
        state
            .panel
            .read()
            .as_ref()
            .map(|p| (p.view().clone(), p.axis_labels()))
    });
    let capacity = use_memo(move || {
        state
            .panel
            .read()
            .as_ref()
            .map(|p| (p.capacity().clone(), p.axis_labels()))
    });
    let overlay = use_memo(move || state.panel.read().as_ref().map(|p| *p.overlay()));

    // Re-render both scatter charts whenever the view or axis labels change
    use_effect(move || {
        let Some((view, labels)) = view() else {
            return;
        };
        let data_json = match serde_json::to_string(&view) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[SORB] app: failed to serialize view: {}", e);
                return;
            }
        };

        let charts = [
            (LOADING_CHART_ID, ScatterChartConfig::loading(&labels)),
            (HENRY_CHART_ID, ScatterChartConfig::henry(&labels)),
        ];
        for (chart_id, config) in charts {
            if view.is_empty() {
                js_bridge::destroy_chart(chart_id);
                continue;
            }
            let config_json = serde_json::to_string(&config).unwrap_or_default();
            log::info!(
                "[SORB] app: rendering {} with {} materials",
                chart_id,
                view.len()
            );
            js_bridge::render_scatter_chart(chart_id, &data_json, &config_json);
        }
    });

    // Re-render the working capacity chart when the pair or range changes
    use_effect(move || {
        let Some((capacity, labels)) = capacity() else {
            return;
        };
        if capacity.is_empty() {
            js_bridge::destroy_chart(CAPACITY_CHART_ID);
            return;
        }
        let data_json = match serde_json::to_string(&capacity) {
            Ok(json) => json,
            Err(e) => {
                log::error!("[SORB] app: failed to serialize capacity: {}", e);
                return;
            }
        };
        let config_json = serde_json::to_string(&ScatterChartConfig::capacity(&labels)).unwrap_or_default();
        log::info!(
            "[SORB] app: rendering {} with {} materials",
            CAPACITY_CHART_ID,
            capacity.len()
        );
        js_bridge::render_scatter_chart(CAPACITY_CHART_ID, &data_json, &config_json);
    });

    // Redraw error bars and highlight whenever the overlay changes
    use_effect(move || {
        let Some(overlay) = overlay() else {
            return;
        };
        let columns = overlay.columns();
        let selected = overlay.selected_index();
        js_bridge::render_error_overlay(LOADING_CHART_ID, &ChartSegments::loading(&columns), selected);
        js_bridge::render_error_overlay(HENRY_CHART_ID, &ChartSegments::henry(&columns), selected);
        // capacity materials share the view order; highlight only, no error bars
        js_bridge::render_error_overlay(CAPACITY_CHART_ID, &ChartSegments::default(), selected);
    });

    let point_count = view.read().as_ref().map_or(0, |(v, _)| v.len());
    let capacity_count = capacity.read().as_ref().map_or(0, |(c, _)| c.len());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Material explorer for separations".to_string(),
                instructions: INSTRUCTIONS.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                GasPairSelector {}

                if let Some(notice) = (state.notice)() {
                    ErrorDisplay { message: notice, notice: true }
                }

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px;",
                    ChartContainer {
                        id: LOADING_CHART_ID.to_string(),
                        point_count,
                    }
                    ChartContainer {
                        id: HENRY_CHART_ID.to_string(),
                        point_count,
                    }
                }

                PressureSlider {}

                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-top: 12px;",
                    div {
                        ChartContainer {
                            id: CAPACITY_CHART_ID.to_string(),
                            point_count: capacity_count,
                        }
                        CapacityRangeSlider {}
                    }
                    MaterialList {}
                }

                MaterialDetailsPanel {}
            }
        }
    }
}
