//! Radio button group for choosing the compared gas pair.

use crate::state::AppState;
use dioxus::prelude::*;
use sorb_core::PanelEvent;

/// Gas-pair radio group.
/// Reads the configured presets from the panel and dispatches `SelectGasPair` on click.
#[component]
pub fn GasPairSelector() -> Element {
    let state = use_context::<AppState>();
    let (labels, active) = match &*state.panel.read() {
        Some(panel) => (
            panel
                .config()
                .presets
                .iter()
                .map(|p| p.label.clone())
                .collect::<Vec<_>>(),
            panel.state().gas_pair_choice,
        ),
        None => (Vec::new(), 0),
    };

    rsx! {
        div {
            role: "radiogroup",
            style: "margin: 8px 0; display: inline-flex;",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    role: "radio",
                    aria_checked: index == active,
                    style: button_style(index == active),
                    onclick: move |_| {
                        let mut state = state;
                        state.dispatch(PanelEvent::SelectGasPair(index));
                    },
                    "{label}"
                }
            }
        }
    }
}

fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 6px 14px; border: 1px solid #1565C0; background: #1565C0; color: white;"
    } else {
        "padding: 6px 14px; border: 1px solid #1565C0; background: white; color: #1565C0; cursor: pointer;"
    }
}
