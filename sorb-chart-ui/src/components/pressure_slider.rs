//! Pressure slider.

use crate::state::AppState;
use dioxus::prelude::*;
use sorb_core::PanelEvent;

/// Slider over the configured pressure steps, shown one-based (`1..=steps`).
#[component]
pub fn PressureSlider() -> Element {
    let mut state = use_context::<AppState>();
    let (steps, current) = match &*state.panel.read() {
        Some(panel) => (panel.config().pressure_steps, panel.state().pressure_step + 1),
        None => (1, 1),
    };

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<usize>() {
            Ok(value) if value >= 1 => {
                state.dispatch(PanelEvent::MovePressureSlider(value - 1));
            }
            _ => log::warn!("[SORB] ui: ignoring slider value {:?}", evt.value()),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; width: 500px;",
            label {
                r#for: "pressure-slider",
                style: "font-weight: bold; margin-right: 8px;",
                "pressure: {current}"
            }
            input {
                id: "pressure-slider",
                r#type: "range",
                min: "1",
                max: "{steps}",
                step: "1",
                value: "{current}",
                style: "width: 100%;",
                onchange: on_change,
            }
        }
    }
}
