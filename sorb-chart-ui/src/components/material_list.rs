//! Material table with Henry selectivity.

use crate::state::AppState;
use dioxus::prelude::*;
use sorb_core::{DerivedView, PanelEvent};

/// One table row: view index, material, formatted `KH2/KH1`.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRow {
    pub index: usize,
    pub material: String,
    pub selectivity: String,
}

/// Rows of the material table in view order.
pub fn material_rows(view: &DerivedView) -> Vec<MaterialRow> {
    view.labels
        .iter()
        .zip(view.henry_selectivity())
        .enumerate()
        .map(|(index, (material, selectivity))| MaterialRow {
            index,
            material: material.clone(),
            selectivity: selectivity_text(selectivity),
        })
        .collect()
}

/// `KH2/KH1` for display; `-` when gas1's Henry constant is zero.
pub fn selectivity_text(value: Option<f64>) -> String {
    let Some(value) = value else {
        return "-".to_string();
    };
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{:.1}", value)
    }
}

/// Lists the materials on the charts; clicking a row selects that point.
#[component]
pub fn MaterialList() -> Element {
    let state = use_context::<AppState>();
    let (rows, selected) = match &*state.panel.read() {
        Some(panel) => (material_rows(panel.view()), panel.state().selected_index),
        None => (Vec::new(), None),
    };

    rsx! {
        div {
            style: "max-height: 500px; overflow-y: auto; min-width: 300px;",
            table {
                style: "border-collapse: collapse; font-size: 13px; width: 100%;",
                thead {
                    tr {
                        th { style: "text-align: left; padding: 2px 8px;", "Material" }
                        th { style: "text-align: right; padding: 2px 8px;", "KH2/KH1" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.index}",
                            style: row_style(selected == Some(row.index)),
                            onclick: move |_| {
                                let mut state = state;
                                state.dispatch(PanelEvent::SelectPoints(vec![row.index]));
                            },
                            td { style: "padding: 2px 8px;", "{row.material}" }
                            td { style: "text-align: right; padding: 2px 8px;", "{row.selectivity}" }
                        }
                    }
                }
            }
        }
    }
}

fn row_style(selected: bool) -> &'static str {
    if selected {
        "cursor: pointer; background: #E3F2FD; font-weight: bold;"
    } else {
        "cursor: pointer;"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_view_order_with_selectivity() {
        let view = DerivedView {
            labels: vec!["m1".to_string(), "m2".to_string(), "m3".to_string()],
            x1: vec![10.0, 0.0, 2.0],
            y1: vec![25.0, 5.0, 4000.0],
            ..DerivedView::default()
        };
        let rows = material_rows(&view);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].material, "m1");
        assert_eq!(rows[0].selectivity, "2.5");
        assert_eq!(rows[1].selectivity, "-", "zero gas1 Henry constant has no selectivity");
        assert_eq!(rows[2].index, 2);
        assert_eq!(rows[2].selectivity, "2.0k");
    }
}
