//! Projections of the dataset into the column sets the charts consume.
//!
//! Every view is computed over the materials measured for BOTH gases of a
//! pair, in the first gas's table order. All columns of a view are aligned:
//! index `i` of every column refers to the same material.

use crate::dataset::{Dataset, MaterialRecord};
use crate::error::Result;
use crate::gas::GasId;
use serde::Serialize;

/// Per-chart-pair projection used by the loading and Henry charts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedView {
    pub labels: Vec<String>,
    /// Loading of gas1 at the selected pressure step.
    pub x0: Vec<f64>,
    /// Loading of gas2 at the selected pressure step.
    pub y0: Vec<f64>,
    /// Henry constant of gas1.
    pub x1: Vec<f64>,
    /// Henry constant of gas2.
    pub y1: Vec<f64>,
    /// Combined loading isotherm count of both gases.
    pub z0: Vec<f64>,
    /// Combined Henry isotherm count of both gases.
    pub z1: Vec<f64>,
}

impl DerivedView {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Loading chart coordinates of a point.
    pub fn loading_point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x0.get(index)?, *self.y0.get(index)?))
    }

    /// Henry chart coordinates of a point.
    pub fn henry_point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.x1.get(index)?, *self.y1.get(index)?))
    }

    /// Henry selectivity `KH2/KH1` per material, aligned to `labels`.
    ///
    /// `None` where gas1's Henry constant is zero.
    pub fn henry_selectivity(&self) -> Vec<Option<f64>> {
        self.x1
            .iter()
            .zip(&self.y1)
            .map(|(&kh1, &kh2)| (kh1 != 0.0).then(|| kh2 / kh1))
            .collect()
    }

    fn with_capacity(n: usize) -> Self {
        Self {
            labels: Vec::with_capacity(n),
            x0: Vec::with_capacity(n),
            y0: Vec::with_capacity(n),
            x1: Vec::with_capacity(n),
            y1: Vec::with_capacity(n),
            z0: Vec::with_capacity(n),
            z1: Vec::with_capacity(n),
        }
    }
}

/// Materials present for both gases, paired up in `gas1`'s order.
///
/// Fails with `UnknownGas` when either gas is absent from the dataset.
pub fn common_materials<'a>(
    dataset: &'a Dataset,
    gas1: &GasId,
    gas2: &GasId,
) -> Result<Vec<(&'a MaterialRecord, &'a MaterialRecord)>> {
    let first = dataset.table(gas1)?;
    let second = dataset.table(gas2)?;
    Ok(first
        .iter()
        .filter_map(|r1| second.get(&r1.material).map(|r2| (r1, r2)))
        .collect())
}

/// Build the loading/Henry view for a gas pair at a pressure step.
///
/// An empty intersection yields an empty view, not an error. Fails with
/// `UnknownGas` for an absent gas and with `PressureStepOutOfRange` when a
/// common material lacks the requested step.
pub fn build_view(
    dataset: &Dataset,
    gas1: &GasId,
    gas2: &GasId,
    pressure_step: usize,
) -> Result<DerivedView> {
    let pairs = common_materials(dataset, gas1, gas2)?;
    let mut view = DerivedView::with_capacity(pairs.len());

    for (r1, r2) in pairs {
        view.x0.push(r1.loading_at(pressure_step)?);
        view.y0.push(r2.loading_at(pressure_step)?);
        view.x1.push(r1.henry);
        view.y1.push(r2.henry);
        view.z0.push(r1.loading_isotherms + r2.loading_isotherms);
        view.z1.push(r1.henry_isotherms + r2.henry_isotherms);
        view.labels.push(r1.material.clone());
    }

    log::debug!(
        "[SORB] view: {} / {} at step {} -> {} materials",
        gas1,
        gas2,
        pressure_step,
        view.len()
    );
    Ok(view)
}

/// Uptake difference between two pressure steps for both gases of a pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkingCapacityView {
    pub labels: Vec<String>,
    /// Working capacity of gas1 (mmol/g).
    pub x: Vec<f64>,
    /// Working capacity of gas2 (mmol/g).
    pub y: Vec<f64>,
    /// Combined loading isotherm count of both gases.
    pub z: Vec<f64>,
}

impl WorkingCapacityView {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the working-capacity view, `loading[high] - loading[low]` per gas.
///
/// Materials come in the same order as [`build_view`], so a point index
/// addresses the same material in both views. `low_step > high_step` is
/// accepted and produces negative capacities.
pub fn build_working_capacity(
    dataset: &Dataset,
    gas1: &GasId,
    gas2: &GasId,
    low_step: usize,
    high_step: usize,
) -> Result<WorkingCapacityView> {
    let pairs = common_materials(dataset, gas1, gas2)?;
    let mut view = WorkingCapacityView {
        labels: Vec::with_capacity(pairs.len()),
        x: Vec::with_capacity(pairs.len()),
        y: Vec::with_capacity(pairs.len()),
        z: Vec::with_capacity(pairs.len()),
    };

    for (r1, r2) in pairs {
        view.x.push(r1.loading_at(high_step)? - r1.loading_at(low_step)?);
        view.y.push(r2.loading_at(high_step)? - r2.loading_at(low_step)?);
        view.z.push(r1.loading_isotherms + r2.loading_isotherms);
        view.labels.push(r1.material.clone());
    }
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::record;
    use crate::error::SorbError;

    fn scenario_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", "m1", &[1.0, 2.0], 10.0, (0.1, 0.2)),
            record("B", "m1", &[3.0, 4.0], 20.0, (0.3, 0.4)),
        ])
        .unwrap()
    }

    fn mixed_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("A", "m3", &[3.0, 6.0], 30.0, (0.1, 0.1)),
            record("A", "m1", &[1.0, 2.0], 10.0, (0.1, 0.1)),
            record("A", "only-a", &[9.0, 9.0], 90.0, (0.1, 0.1)),
            record("A", "m2", &[2.0, 4.0], 20.0, (0.1, 0.1)),
            record("B", "m1", &[1.5, 2.5], 15.0, (0.1, 0.1)),
            record("B", "only-b", &[8.0, 8.0], 80.0, (0.1, 0.1)),
            record("B", "m2", &[2.5, 4.5], 25.0, (0.1, 0.1)),
            record("B", "m3", &[3.5, 6.5], 35.0, (0.1, 0.1)),
            record("C", "unrelated", &[1.0, 1.0], 1.0, (0.1, 0.1)),
        ])
        .unwrap()
    }

    #[test]
    fn build_view_single_common_material() {
        let view = build_view(&scenario_dataset(), &"A".into(), &"B".into(), 0).unwrap();
        assert_eq!(view.labels, vec!["m1"]);
        assert_eq!(view.x0, vec![1.0]);
        assert_eq!(view.y0, vec![3.0]);
        assert_eq!(view.x1, vec![10.0]);
        assert_eq!(view.y1, vec![20.0]);
        assert_eq!(view.z0, vec![8.0]);
        assert_eq!(view.z1, vec![6.0]);
    }

    #[test]
    fn build_view_uses_selected_pressure_step() {
        let view = build_view(&scenario_dataset(), &"A".into(), &"B".into(), 1).unwrap();
        assert_eq!(view.x0, vec![2.0]);
        assert_eq!(view.y0, vec![4.0]);
    }

    #[test]
    fn build_view_keeps_first_gas_order() {
        let view = build_view(&mixed_dataset(), &"A".into(), &"B".into(), 0).unwrap();
        assert_eq!(view.labels, vec!["m3", "m1", "m2"]);
        assert_eq!(view.x0, vec![3.0, 1.0, 2.0]);
        assert_eq!(view.y0, vec![3.5, 1.5, 2.5]);

        let swapped = build_view(&mixed_dataset(), &"B".into(), &"A".into(), 0).unwrap();
        assert_eq!(swapped.labels, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn build_view_columns_are_aligned() {
        let view = build_view(&mixed_dataset(), &"A".into(), &"B".into(), 1).unwrap();
        let n = view.labels.len();
        for column in [&view.x0, &view.y0, &view.x1, &view.y1, &view.z0, &view.z1] {
            assert_eq!(column.len(), n, "every column must match the label count");
        }
    }

    #[test]
    fn build_view_is_idempotent() {
        let dataset = mixed_dataset();
        let first = build_view(&dataset, &"A".into(), &"B".into(), 1).unwrap();
        let second = build_view(&dataset, &"A".into(), &"B".into(), 1).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_intersection_is_an_empty_view() {
        let view = build_view(&mixed_dataset(), &"A".into(), &"C".into(), 0).unwrap();
        assert!(view.is_empty());
        assert_eq!(view, DerivedView::default());
    }

    #[test]
    fn unknown_gas_is_an_error() {
        let err = build_view(&mixed_dataset(), &"A".into(), &"xenon".into(), 0).unwrap_err();
        assert_eq!(err, SorbError::UnknownGas("xenon".to_string()));

        let err = build_view(&mixed_dataset(), &"xenon".into(), &"A".into(), 0).unwrap_err();
        assert_eq!(err, SorbError::UnknownGas("xenon".to_string()));
    }

    #[test]
    fn missing_pressure_step_is_an_error() {
        let err = build_view(&scenario_dataset(), &"A".into(), &"B".into(), 2).unwrap_err();
        assert!(matches!(err, SorbError::PressureStepOutOfRange { step: 2, .. }));
    }

    #[test]
    fn working_capacity_is_loading_difference() {
        let view = build_working_capacity(&mixed_dataset(), &"A".into(), &"B".into(), 0, 1).unwrap();
        assert_eq!(view.labels, vec!["m3", "m1", "m2"]);
        assert_eq!(view.x, vec![3.0, 1.0, 2.0]);
        assert_eq!(view.y, vec![3.0, 1.0, 2.0]);

        let reversed =
            build_working_capacity(&mixed_dataset(), &"A".into(), &"B".into(), 1, 0).unwrap();
        assert_eq!(reversed.x, vec![-3.0, -1.0, -2.0]);
    }

    #[test]
    fn working_capacity_carries_isotherm_colour() {
        let view = build_working_capacity(&mixed_dataset(), &"A".into(), &"B".into(), 0, 1).unwrap();
        assert_eq!(view.z, vec![8.0, 8.0, 8.0]);
        assert_eq!(view.len(), view.z.len());
    }

    #[test]
    fn henry_selectivity_is_gas2_over_gas1() {
        let view = build_view(&mixed_dataset(), &"A".into(), &"B".into(), 0).unwrap();
        assert_eq!(
            view.henry_selectivity(),
            vec![Some(35.0 / 30.0), Some(1.5), Some(1.25)]
        );

        let zero_henry = DerivedView {
            labels: vec!["m".to_string()],
            x1: vec![0.0],
            y1: vec![2.0],
            ..DerivedView::default()
        };
        assert_eq!(zero_henry.henry_selectivity(), vec![None]);
        assert!(DerivedView::default().henry_selectivity().is_empty());
    }
}
