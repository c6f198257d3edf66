//! Control panel state machine.
//!
//! The panel owns the current gas-pair choice, pressure step and selection,
//! together with the view and overlay derived from them. User actions arrive
//! as [`PanelEvent`]s; each one is handled to completion and either commits a
//! complete new state or, on error, leaves the previous state untouched.
//!
//! | event                 | view       | selection / overlay        |
//! |-----------------------|------------|----------------------------|
//! | `SelectGasPair`       | recomputed | cleared                    |
//! | `MovePressureSlider`  | recomputed | cleared                    |
//! | `MoveCapacityRange`   | kept       | kept                       |
//! | `SelectPoints`        | kept       | one index: overlay, else cleared |
//!
//! The working-capacity view is rebuilt on `SelectGasPair` and
//! `MoveCapacityRange`. It lists materials in the same order as the view, so
//! a selected index highlights the same material on every chart.

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::details::{material_details, MaterialDetails};
use crate::error::{Result, SorbError};
use crate::gas::{AxisLabels, GasPair};
use crate::overlay::{compute_overlay, ErrorOverlay};
use crate::view::{build_view, build_working_capacity, DerivedView, WorkingCapacityView};
use serde::Serialize;
use std::rc::Rc;

/// The user's current choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlPanelState {
    pub gas_pair_choice: usize,
    /// Zero-based pressure step.
    pub pressure_step: usize,
    /// Index into the current view's labels.
    pub selected_index: Option<usize>,
    /// Zero-based (low, high) steps of the working-capacity range.
    pub capacity_range: (usize, usize),
}

/// A user action delivered by the widget layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// Radio button `index` of the gas-pair group was clicked.
    SelectGasPair(usize),
    /// The pressure slider moved to a zero-based step.
    MovePressureSlider(usize),
    /// The working-capacity range handles moved to zero-based steps, in
    /// either order.
    MoveCapacityRange(usize, usize),
    /// The chart reported its current point selection.
    SelectPoints(Vec<usize>),
}

/// What a handled event changed, so the caller knows which buffers to push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelUpdate {
    /// The view was replaced and the overlay cleared.
    ViewReplaced { axis_labels_changed: bool },
    /// Only the overlay changed (possibly to empty).
    OverlayChanged,
    /// Only the working-capacity view was replaced.
    CapacityReplaced,
}

/// Long-lived control panel for one dashboard session.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    dataset: Rc<Dataset>,
    config: DashboardConfig,
    state: ControlPanelState,
    pair: GasPair,
    view: DerivedView,
    capacity: WorkingCapacityView,
    overlay: ErrorOverlay,
}

impl ControlPanel {
    /// Create a panel showing the configured default preset and step.
    pub fn new(dataset: Rc<Dataset>, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let preset = config.default_preset;
        let step = config.default_step;
        let pair = config.preset(preset)?.pair.clone();
        let view = build_view(&dataset, &pair.gas1, &pair.gas2, step)?;
        let capacity_range = (0, config.pressure_steps - 1);
        let capacity = build_working_capacity(
            &dataset,
            &pair.gas1,
            &pair.gas2,
            capacity_range.0,
            capacity_range.1,
        )?;

        log::info!(
            "[SORB] panel: starting with {} / {} at step {} ({} materials)",
            pair.gas1,
            pair.gas2,
            step,
            view.len()
        );
        Ok(Self {
            dataset,
            config,
            state: ControlPanelState {
                gas_pair_choice: preset,
                pressure_step: step,
                selected_index: None,
                capacity_range,
            },
            pair,
            view,
            capacity,
            overlay: ErrorOverlay::Empty,
        })
    }

    /// Handle one event to completion.
    pub fn dispatch(&mut self, event: PanelEvent) -> Result<PanelUpdate> {
        match event {
            PanelEvent::SelectGasPair(index) => self.select_gas_pair(index),
            PanelEvent::MovePressureSlider(step) => self.move_pressure_slider(step),
            PanelEvent::MoveCapacityRange(low, high) => self.move_capacity_range(low, high),
            PanelEvent::SelectPoints(indices) => Ok(self.select_points(&indices)),
        }
    }

    /// Switch to a preset gas pair, recompute the view and clear the selection.
    ///
    /// On error the previous pair, views and selection are kept.
    pub fn select_gas_pair(&mut self, index: usize) -> Result<PanelUpdate> {
        let pair = self.config.preset(index)?.pair.clone();
        let (low, high) = self.state.capacity_range;
        let views = build_view(&self.dataset, &pair.gas1, &pair.gas2, self.state.pressure_step)
            .and_then(|view| {
                let capacity =
                    build_working_capacity(&self.dataset, &pair.gas1, &pair.gas2, low, high)?;
                Ok((view, capacity))
            });
        let (view, capacity) = views.map_err(|e| {
            log::warn!("[SORB] panel: rejected gas pair {}: {}", index, e);
            e
        })?;

        let axis_labels_changed = pair != self.pair;
        self.state.gas_pair_choice = index;
        self.pair = pair;
        self.capacity = capacity;
        self.replace_view(view);
        Ok(PanelUpdate::ViewReplaced {
            axis_labels_changed,
        })
    }

    /// Move to a zero-based pressure step, recompute the view and clear the
    /// selection.
    pub fn move_pressure_slider(&mut self, step: usize) -> Result<PanelUpdate> {
        if step >= self.config.pressure_steps {
            return Err(SorbError::InvalidPressureStep {
                step,
                steps: self.config.pressure_steps,
            });
        }
        let view = build_view(&self.dataset, &self.pair.gas1, &self.pair.gas2, step)?;

        self.state.pressure_step = step;
        self.replace_view(view);
        Ok(PanelUpdate::ViewReplaced {
            axis_labels_changed: false,
        })
    }

    /// Slider values are one-based (`1..=pressure_steps`).
    pub fn move_pressure_slider_value(&mut self, value: usize) -> Result<PanelUpdate> {
        match value.checked_sub(1) {
            Some(step) => self.move_pressure_slider(step),
            None => Err(SorbError::InvalidPressureStep {
                step: value,
                steps: self.config.pressure_steps,
            }),
        }
    }

    /// Move the working-capacity range. Handles may cross; the range is
    /// stored as (lower, upper). The selection is kept.
    pub fn move_capacity_range(&mut self, low: usize, high: usize) -> Result<PanelUpdate> {
        let steps = self.config.pressure_steps;
        if let Some(&step) = [low, high].iter().find(|&&s| s >= steps) {
            return Err(SorbError::InvalidPressureStep { step, steps });
        }
        let range = (low.min(high), low.max(high));
        let capacity = build_working_capacity(
            &self.dataset,
            &self.pair.gas1,
            &self.pair.gas2,
            range.0,
            range.1,
        )?;

        log::info!(
            "[SORB] panel: working capacity {} / {} over steps {}..={}",
            self.pair.gas1,
            self.pair.gas2,
            range.0,
            range.1
        );
        self.state.capacity_range = range;
        self.capacity = capacity;
        Ok(PanelUpdate::CapacityReplaced)
    }

    /// Apply the chart's point selection. Exactly one index produces an
    /// overlay; any other count clears it.
    pub fn select_points(&mut self, indices: &[usize]) -> PanelUpdate {
        match indices {
            [index] => self.select_point(Some(*index)),
            _ => self.select_point(None),
        }
    }

    /// Select a single point, or clear the selection with `None`.
    ///
    /// A stale index (the view changed since it was captured) clears the
    /// selection instead of failing.
    pub fn select_point(&mut self, index: Option<usize>) -> PanelUpdate {
        let overlay = compute_overlay(
            &self.view,
            &self.dataset,
            &self.pair.gas1,
            &self.pair.gas2,
            index,
        );
        match overlay {
            Ok(overlay) => {
                self.state.selected_index = index;
                self.overlay = overlay;
            }
            Err(e) => {
                log::warn!("[SORB] panel: clearing stale selection: {}", e);
                self.state.selected_index = None;
                self.overlay = ErrorOverlay::Empty;
            }
        }
        PanelUpdate::OverlayChanged
    }

    fn replace_view(&mut self, view: DerivedView) {
        log::info!(
            "[SORB] panel: view {} / {} at step {} -> {} materials",
            self.pair.gas1,
            self.pair.gas2,
            self.state.pressure_step,
            view.len()
        );
        self.view = view;
        self.state.selected_index = None;
        self.overlay = ErrorOverlay::Empty;
    }

    pub fn state(&self) -> ControlPanelState {
        self.state
    }

    pub fn gas_pair(&self) -> &GasPair {
        &self.pair
    }

    pub fn axis_labels(&self) -> AxisLabels {
        self.pair.axis_labels()
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Working capacity of the current pair over the current range.
    pub fn capacity(&self) -> &WorkingCapacityView {
        &self.capacity
    }

    pub fn overlay(&self) -> &ErrorOverlay {
        &self.overlay
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Details of the selected material, if exactly one point is selected.
    pub fn selected_details(&self) -> Option<MaterialDetails> {
        let index = self.state.selected_index?;
        material_details(
            &self.view,
            &self.dataset,
            &self.pair.gas1,
            &self.pair.gas2,
            index,
        )
        .ok()
    }

    /// Working capacity of the current pair between two zero-based steps.
    pub fn working_capacity(&self, low_step: usize, high_step: usize) -> Result<WorkingCapacityView> {
        build_working_capacity(
            &self.dataset,
            &self.pair.gas1,
            &self.pair.gas2,
            low_step,
            high_step,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GasPairPreset;
    use crate::dataset::tests::record;

    fn dataset() -> Rc<Dataset> {
        Rc::new(
            Dataset::from_records(vec![
                record("A", "m1", &[1.0, 2.0, 3.0], 10.0, (0.1, 0.2)),
                record("A", "m2", &[2.0, 3.0, 4.0], 11.0, (0.1, 0.2)),
                record("B", "m1", &[3.0, 4.0, 5.0], 20.0, (0.3, 0.4)),
                record("B", "m2", &[4.0, 5.0, 6.0], 21.0, (0.3, 0.4)),
                record("C", "m2", &[5.0, 6.0, 7.0], 30.0, (0.5, 0.6)),
            ])
            .unwrap(),
        )
    }

    fn config() -> DashboardConfig {
        DashboardConfig {
            presets: vec![
                GasPairPreset::new("A / B", "A", "B"),
                GasPairPreset::new("A / C", "A", "C"),
                GasPairPreset::new("A / X", "A", "xenon"),
            ],
            pressure_steps: 3,
            default_preset: 0,
            default_step: 0,
        }
    }

    fn panel() -> ControlPanel {
        ControlPanel::new(dataset(), config()).unwrap()
    }

    #[test]
    fn starts_on_default_preset() {
        let panel = panel();
        assert_eq!(panel.state().gas_pair_choice, 0);
        assert_eq!(panel.state().selected_index, None);
        assert_eq!(panel.view().labels, vec!["m1", "m2"]);
        assert!(panel.overlay().is_empty());
        assert_eq!(panel.axis_labels().loading_x, "A (mmol/g)");
    }

    #[test]
    fn selecting_one_point_sets_overlay() {
        let mut panel = panel();
        let update = panel.dispatch(PanelEvent::SelectPoints(vec![1])).unwrap();
        assert_eq!(update, PanelUpdate::OverlayChanged);
        assert_eq!(panel.state().selected_index, Some(1));
        assert!(!panel.overlay().is_empty());
        assert_eq!(panel.selected_details().unwrap().material, "m2");
    }

    #[test]
    fn multiple_or_no_points_clear_overlay() {
        let mut panel = panel();
        panel.select_points(&[0]);
        panel.select_points(&[0, 1]);
        assert!(panel.overlay().is_empty());
        assert_eq!(panel.state().selected_index, None);

        panel.select_points(&[0]);
        panel.select_points(&[]);
        assert!(panel.overlay().is_empty());
        assert!(panel.selected_details().is_none());
    }

    #[test]
    fn stale_index_clears_selection() {
        let mut panel = panel();
        panel.select_points(&[1]);
        panel.select_points(&[7]);
        assert_eq!(panel.state().selected_index, None);
        assert!(panel.overlay().is_empty());
    }

    #[test]
    fn gas_pair_then_slider_reset_selection() {
        let mut panel = panel();

        panel.select_points(&[0]);
        let update = panel.dispatch(PanelEvent::SelectGasPair(1)).unwrap();
        assert_eq!(
            update,
            PanelUpdate::ViewReplaced {
                axis_labels_changed: true
            }
        );
        assert_eq!(panel.state().selected_index, None);
        assert!(panel.overlay().is_empty());
        assert_eq!(panel.view().labels, vec!["m2"]);
        assert_eq!(panel.axis_labels().henry_y, "C (dimensionless)");

        panel.select_points(&[0]);
        panel.dispatch(PanelEvent::MovePressureSlider(2)).unwrap();
        assert_eq!(panel.state().selected_index, None);
        assert!(panel.overlay().is_empty());
        assert_eq!(panel.view().x0, vec![4.0]);
        assert_eq!(panel.view().y0, vec![7.0]);
    }

    #[test]
    fn pressure_step_is_kept_across_gas_pairs() {
        let mut panel = panel();
        panel.move_pressure_slider_value(2).unwrap();
        assert_eq!(panel.state().pressure_step, 1);
        panel.select_gas_pair(1).unwrap();
        assert_eq!(panel.view().x0, vec![3.0]);
    }

    #[test]
    fn unknown_gas_keeps_prior_view() {
        let mut panel = panel();
        panel.select_points(&[1]);
        let before_view = panel.view().clone();
        let before_state = panel.state();
        let before_overlay = *panel.overlay();

        let err = panel.dispatch(PanelEvent::SelectGasPair(2)).unwrap_err();
        assert_eq!(err, SorbError::UnknownGas("xenon".to_string()));
        assert_eq!(panel.view(), &before_view);
        assert_eq!(panel.state(), before_state);
        assert_eq!(panel.overlay(), &before_overlay);
        assert_eq!(panel.gas_pair(), &GasPair::new("A", "B"));
    }

    #[test]
    fn unknown_preset_and_bad_step_are_rejected() {
        let mut panel = panel();
        assert_eq!(
            panel.select_gas_pair(9).unwrap_err(),
            SorbError::UnknownGasPair(9)
        );
        assert!(matches!(
            panel.move_pressure_slider(3),
            Err(SorbError::InvalidPressureStep { step: 3, steps: 3 })
        ));
        assert!(panel.move_pressure_slider_value(0).is_err());
        assert_eq!(panel.state().pressure_step, 0);
    }

    #[test]
    fn reselecting_same_pair_keeps_labels() {
        let mut panel = panel();
        let update = panel.select_gas_pair(0).unwrap();
        assert_eq!(
            update,
            PanelUpdate::ViewReplaced {
                axis_labels_changed: false
            }
        );
    }

    #[test]
    fn working_capacity_uses_current_pair() {
        let panel = panel();
        let wc = panel.working_capacity(0, 2).unwrap();
        assert_eq!(wc.labels, vec!["m1", "m2"]);
        assert_eq!(wc.x, vec![2.0, 2.0]);
    }

    #[test]
    fn invalid_default_preset_fails_construction() {
        let mut config = config();
        config.default_preset = 2;
        assert!(ControlPanel::new(dataset(), config).is_err());
    }

    #[test]
    fn capacity_starts_on_full_range() {
        let panel = panel();
        assert_eq!(panel.state().capacity_range, (0, 2));
        assert_eq!(panel.capacity().labels, vec!["m1", "m2"]);
        assert_eq!(panel.capacity().x, vec![2.0, 2.0]);
    }

    #[test]
    fn capacity_range_keeps_selection() {
        let mut panel = panel();
        panel.select_points(&[1]);

        let update = panel.dispatch(PanelEvent::MoveCapacityRange(2, 1)).unwrap();
        assert_eq!(update, PanelUpdate::CapacityReplaced);
        assert_eq!(panel.state().capacity_range, (1, 2));
        assert_eq!(panel.capacity().y, vec![1.0, 1.0]);
        assert_eq!(panel.state().selected_index, Some(1));
        assert!(!panel.overlay().is_empty());
    }

    #[test]
    fn capacity_range_past_steps_is_rejected() {
        let mut panel = panel();
        let before = panel.capacity().clone();
        assert_eq!(
            panel.move_capacity_range(0, 3).unwrap_err(),
            SorbError::InvalidPressureStep { step: 3, steps: 3 }
        );
        assert_eq!(panel.state().capacity_range, (0, 2));
        assert_eq!(panel.capacity(), &before);
    }

    #[test]
    fn gas_pair_rebuilds_capacity_on_current_range() {
        let mut panel = panel();
        panel.move_capacity_range(0, 1).unwrap();
        panel.select_gas_pair(1).unwrap();
        assert_eq!(panel.capacity().labels, vec!["m2"]);
        assert_eq!(panel.capacity().x, vec![1.0]);
        assert_eq!(panel.capacity().y, vec![1.0]);
        assert_eq!(panel.capacity().labels, panel.view().labels);
    }
}
