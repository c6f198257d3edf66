//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Widgets never mutate the panel directly: they send a [`PanelEvent`] through
//! [`AppState::dispatch`], which applies it in one write so charts always see
//! a complete state.

use dioxus::prelude::*;
use sorb_core::{ControlPanel, PanelEvent, PanelUpdate};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Control panel (None until the dataset is loaded)
    pub panel: Signal<Option<ControlPanel>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal error message, replaces the dashboard
    pub error_msg: Signal<Option<String>>,
    /// Rejected user action; the previous charts stay visible
    pub notice: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            panel: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            notice: Signal::new(None),
        }
    }

    /// Apply a user action to the control panel.
    pub fn dispatch(&mut self, event: PanelEvent) -> Option<PanelUpdate> {
        let mut notice = self.notice.peek().clone();
        let update = apply_event(&mut self.panel.write(), &mut notice, event);
        if notice != *self.notice.peek() {
            self.notice.set(notice);
        }
        update
    }
}

/// Apply `event` to `panel`, recording a rejected action in `notice`.
///
/// A rejected action leaves the panel as it was and sets `notice` to the
/// reason; an accepted one clears it. Events before the data is loaded are
/// dropped.
pub fn apply_event(
    panel: &mut Option<ControlPanel>,
    notice: &mut Option<String>,
    event: PanelEvent,
) -> Option<PanelUpdate> {
    let Some(panel) = panel.as_mut() else {
        log::warn!("[SORB] ui: event {:?} before data was loaded", event);
        return None;
    };

    match panel.dispatch(event) {
        Ok(update) => {
            *notice = None;
            Some(update)
        }
        Err(e) => {
            log::warn!("[SORB] ui: rejected action: {}", e);
            *notice = Some(e.to_string());
            None
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sorb_core::{DashboardConfig, Dataset, GasId, GasPairPreset, MaterialRecord};
    use std::rc::Rc;

    fn record(gas: &str, material: &str, henry: f64) -> MaterialRecord {
        MaterialRecord {
            gas: GasId::new(gas),
            material: material.to_string(),
            loading: vec![1.0, 2.0],
            henry,
            loading_error: 0.1,
            henry_error: 0.2,
            loading_isotherms: 3.0,
            henry_isotherms: 2.0,
        }
    }

    fn panel() -> ControlPanel {
        let dataset = Dataset::from_records(vec![
            record("A", "m1", 10.0),
            record("B", "m1", 20.0),
        ])
        .unwrap();
        let config = DashboardConfig {
            presets: vec![
                GasPairPreset::new("A / B", "A", "B"),
                GasPairPreset::new("A / X", "A", "xenon"),
            ],
            pressure_steps: 2,
            default_preset: 0,
            default_step: 0,
        };
        ControlPanel::new(Rc::new(dataset), config).unwrap()
    }

    #[test]
    fn rejected_action_sets_notice_and_keeps_panel() {
        let mut panel = Some(panel());
        let mut notice = None;
        apply_event(&mut panel, &mut notice, PanelEvent::SelectPoints(vec![0]));
        let before_state = panel.as_ref().unwrap().state();
        let before_view = panel.as_ref().unwrap().view().clone();

        let update = apply_event(&mut panel, &mut notice, PanelEvent::SelectGasPair(1));
        assert_eq!(update, None);
        assert_eq!(notice.as_deref(), Some("Unknown gas: xenon"));

        let panel = panel.unwrap();
        assert_eq!(panel.state(), before_state);
        assert_eq!(panel.view(), &before_view);
        assert!(!panel.overlay().is_empty(), "selection survives a rejected action");
    }

    #[test]
    fn accepted_action_clears_notice() {
        let mut panel = Some(panel());
        let mut notice = Some("Unknown gas: xenon".to_string());
        let update = apply_event(&mut panel, &mut notice, PanelEvent::MovePressureSlider(1));
        assert!(matches!(update, Some(PanelUpdate::ViewReplaced { .. })));
        assert_eq!(notice, None);
        assert_eq!(panel.unwrap().state().pressure_step, 1);
    }

    #[test]
    fn events_before_load_are_dropped() {
        let mut panel = None;
        let mut notice = None;
        let update = apply_event(&mut panel, &mut notice, PanelEvent::SelectPoints(vec![0]));
        assert_eq!(update, None);
        assert_eq!(notice, None);
    }
}
