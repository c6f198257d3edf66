//! "Selected material" details panel.

use super::material_list::selectivity_text;
use crate::state::AppState;
use dioxus::prelude::*;
use sorb_core::{MaterialDetails, MaterialRecord};

/// Shows both gases' records for the single selected point, or a hint.
#[component]
pub fn MaterialDetailsPanel() -> Element {
    let state = use_context::<AppState>();
    let details = state.panel.read().as_ref().and_then(|p| p.selected_details());

    rsx! {
        div {
            style: "margin-top: 16px; max-width: 800px;",
            h2 { style: "font-size: 18px; margin: 0 0 8px 0;", "Selected material" }
            if let Some(details) = details {
                {selected_material(details)}
            } else {
                p { style: "color: #666; font-size: 13px;", "Click a point to focus on a particular material." }
            }
        }
    }
}

fn selected_material(details: MaterialDetails) -> Element {
    let (loading_isotherms, henry_isotherms) = details.isotherms;
    let (gas1_loading, gas2_loading) = details.loading_point;
    let selectivity = selectivity_text(details.henry_selectivity);
    let MaterialDetails {
        material, gas1, gas2, ..
    } = details;

    rsx! {
        p {
            style: "font-size: 20px; font-weight: bold; margin: 4px 0;",
            "{material}"
        }
        p {
            style: "font-size: 12px; color: #444; margin: 0 0 8px 0;",
            "Isotherms: {loading_isotherms} (loading), {henry_isotherms} (Henry)"
        }
        p {
            style: "font-size: 12px; color: #444; margin: 0 0 8px 0;",
            "Henry selectivity KH2/KH1: {selectivity}"
        }
        table {
            style: "border-collapse: collapse; font-size: 13px;",
            thead {
                tr {
                    th { style: "text-align: left; padding: 2px 12px 2px 0;", "Gas" }
                    th { style: "text-align: right; padding: 2px 12px;", "Loading (mmol/g)" }
                    th { style: "text-align: right; padding: 2px 12px;", "Henry constant" }
                }
            }
            tbody {
                RecordRow { record: gas1, loading: gas1_loading }
                RecordRow { record: gas2, loading: gas2_loading }
            }
        }
    }
}

#[component]
fn RecordRow(record: MaterialRecord, loading: f64) -> Element {
    let gas = record.gas.to_string();
    rsx! {
        tr {
            td { style: "padding: 2px 12px 2px 0;", "{gas}" }
            td { style: "text-align: right; padding: 2px 12px;", "{loading} ± {record.loading_error}" }
            td { style: "text-align: right; padding: 2px 12px;", "{record.henry} ± {record.henry_error}" }
        }
    }
}
