//! Details of the selected material for the "Selected material" panel.

use crate::dataset::{Dataset, MaterialRecord};
use crate::error::{Result, SorbError};
use crate::gas::GasId;
use crate::view::DerivedView;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialDetails {
    pub material: String,
    /// Position of the material in the current view.
    pub index: usize,
    /// Plotted loading coordinates.
    pub loading_point: (f64, f64),
    /// Plotted Henry coordinates.
    pub henry_point: (f64, f64),
    /// Combined isotherm counts (loading, Henry).
    pub isotherms: (f64, f64),
    /// Henry selectivity `KH2/KH1`; `None` when gas1's constant is zero.
    pub henry_selectivity: Option<f64>,
    pub gas1: MaterialRecord,
    pub gas2: MaterialRecord,
}

/// Collect everything known about the material at `index` of `view`.
pub fn material_details(
    view: &DerivedView,
    dataset: &Dataset,
    gas1: &GasId,
    gas2: &GasId,
    index: usize,
) -> Result<MaterialDetails> {
    let out_of_range = || SorbError::IndexOutOfRange {
        index,
        len: view.len(),
    };
    let material = view.labels.get(index).ok_or_else(out_of_range)?;
    let loading_point = view.loading_point(index).ok_or_else(out_of_range)?;
    let henry_point = view.henry_point(index).ok_or_else(out_of_range)?;
    let isotherms = match (view.z0.get(index), view.z1.get(index)) {
        (Some(z0), Some(z1)) => (*z0, *z1),
        _ => return Err(out_of_range()),
    };

    let lookup = |gas: &GasId| -> Result<MaterialRecord> {
        dataset
            .table(gas)?
            .get(material)
            .cloned()
            .ok_or_else(|| SorbError::InvalidRecord(format!("{} has no record for {}", gas, material)))
    };

    Ok(MaterialDetails {
        material: material.clone(),
        index,
        loading_point,
        henry_point,
        isotherms,
        henry_selectivity: (henry_point.0 != 0.0).then(|| henry_point.1 / henry_point.0),
        gas1: lookup(gas1)?,
        gas2: lookup(gas2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::record;
    use crate::view::build_view;

    #[test]
    fn details_of_selected_point() {
        let dataset = Dataset::from_records(vec![
            record("A", "m1", &[1.0, 2.0], 10.0, (0.1, 0.2)),
            record("A", "m2", &[5.0, 6.0], 50.0, (0.1, 0.2)),
            record("B", "m2", &[7.0, 8.0], 70.0, (0.3, 0.4)),
            record("B", "m1", &[3.0, 4.0], 20.0, (0.3, 0.4)),
        ])
        .unwrap();
        let view = build_view(&dataset, &"A".into(), &"B".into(), 1).unwrap();

        let details = material_details(&view, &dataset, &"A".into(), &"B".into(), 1).unwrap();
        assert_eq!(details.material, "m2");
        assert_eq!(details.loading_point, (6.0, 8.0));
        assert_eq!(details.henry_point, (50.0, 70.0));
        assert_eq!(details.isotherms, (8.0, 6.0));
        assert_eq!(details.henry_selectivity, Some(1.4));
        assert_eq!(details.gas1.gas, GasId::new("A"));
        assert_eq!(details.gas2.henry_error, 0.4);
    }

    #[test]
    fn details_out_of_range() {
        let view = DerivedView::default();
        let err =
            material_details(&view, &Dataset::new(), &"A".into(), &"B".into(), 0).unwrap_err();
        assert_eq!(err, SorbError::IndexOutOfRange { index: 0, len: 0 });
    }
}
