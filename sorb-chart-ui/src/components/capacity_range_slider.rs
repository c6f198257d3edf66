//! Working-capacity range with low and high pressure handles.

use crate::state::AppState;
use dioxus::prelude::*;
use sorb_core::PanelEvent;

/// Two sliders over the configured pressure steps, shown one-based.
/// Either handle may pass the other; the panel stores the ordered range.
#[component]
pub fn CapacityRangeSlider() -> Element {
    let state = use_context::<AppState>();
    let (steps, (low, high)) = match &*state.panel.read() {
        Some(panel) => (panel.config().pressure_steps, panel.state().capacity_range),
        None => (1, (0, 0)),
    };

    let low_value = low + 1;
    let high_value = high + 1;

    rsx! {
        div {
            style: "margin: 8px 0; width: 500px; display: flex; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Working capacity: " }
            label {
                "From: {low_value} "
                input {
                    r#type: "range",
                    min: "1",
                    max: "{steps}",
                    step: "1",
                    value: "{low_value}",
                    onchange: move |evt: Event<FormData>| move_handle(state, &evt.value(), true),
                }
            }
            label {
                "To: {high_value} "
                input {
                    r#type: "range",
                    min: "1",
                    max: "{steps}",
                    step: "1",
                    value: "{high_value}",
                    onchange: move |evt: Event<FormData>| move_handle(state, &evt.value(), false),
                }
            }
        }
    }
}

/// Dispatch the range with one handle moved to the one-based `value`.
fn move_handle(mut state: AppState, value: &str, is_low: bool) {
    let Some(step) = value.parse::<usize>().ok().and_then(|v| v.checked_sub(1)) else {
        log::warn!("[SORB] ui: ignoring capacity value {:?}", value);
        return;
    };
    let current = state.panel.peek().as_ref().map(|p| p.state().capacity_range);
    let Some((low, high)) = current else {
        return;
    };
    let event = if is_low {
        PanelEvent::MoveCapacityRange(step, high)
    } else {
        PanelEvent::MoveCapacityRange(low, step)
    };
    state.dispatch(event);
}
