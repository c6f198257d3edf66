//! Error-bar overlay for a single selected material.
//!
//! The overlay draws an error cross on each chart: a horizontal arm whose
//! half-length is gas1's reported error and a vertical arm whose half-length
//! is gas2's reported error for the plotted quantity.

use crate::dataset::Dataset;
use crate::error::{Result, SorbError};
use crate::gas::GasId;
use crate::view::DerivedView;
use serde::Serialize;

/// A straight line between two chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Horizontal and vertical error arms centred on one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorCross {
    pub horizontal: Segment,
    pub vertical: Segment,
}

impl ErrorCross {
    /// Cross centred on `(x, y)` with half-lengths `x_error` and `y_error`.
    pub fn around(x: f64, y: f64, x_error: f64, y_error: f64) -> Self {
        Self {
            horizontal: Segment {
                start: (x - x_error, y),
                end: (x + x_error, y),
            },
            vertical: Segment {
                start: (x, y - y_error),
                end: (x, y + y_error),
            },
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.vertical.start.0, self.horizontal.start.1)
    }

    pub fn x_half_length(&self) -> f64 {
        (self.horizontal.end.0 - self.horizontal.start.0) / 2.0
    }

    pub fn y_half_length(&self) -> f64 {
        (self.vertical.end.1 - self.vertical.start.1) / 2.0
    }
}

/// Error bars of the selected point on both charts, or nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorOverlay {
    #[default]
    Empty,
    Selected {
        index: usize,
        loading: ErrorCross,
        henry: ErrorCross,
    },
}

impl ErrorOverlay {
    pub fn is_empty(&self) -> bool {
        matches!(self, ErrorOverlay::Empty)
    }

    /// Index of the point the overlay belongs to.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            ErrorOverlay::Empty => None,
            ErrorOverlay::Selected { index, .. } => Some(*index),
        }
    }

    /// Segment columns in the layout the chart layer draws from: `*0*` is the
    /// loading chart, `*1*` the Henry chart; `x?0/y?0` hold segment starts and
    /// `x?1/y?1` segment ends, one entry per arm.
    pub fn columns(&self) -> OverlayColumns {
        match self {
            ErrorOverlay::Empty => OverlayColumns::default(),
            ErrorOverlay::Selected { loading, henry, .. } => {
                let (x00, y00, x01, y01) = arm_columns(loading);
                let (x10, y10, x11, y11) = arm_columns(henry);
                OverlayColumns {
                    x00,
                    y00,
                    x01,
                    y01,
                    x10,
                    y10,
                    x11,
                    y11,
                }
            }
        }
    }
}

type ArmColumns = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>);

fn arm_columns(cross: &ErrorCross) -> ArmColumns {
    let arms = [cross.horizontal, cross.vertical];
    (
        arms.iter().map(|s| s.start.0).collect(),
        arms.iter().map(|s| s.start.1).collect(),
        arms.iter().map(|s| s.end.0).collect(),
        arms.iter().map(|s| s.end.1).collect(),
    )
}

/// Columnar form of an [`ErrorOverlay`]. All columns are empty together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlayColumns {
    pub x00: Vec<f64>,
    pub y00: Vec<f64>,
    pub x01: Vec<f64>,
    pub y01: Vec<f64>,
    pub x10: Vec<f64>,
    pub y10: Vec<f64>,
    pub x11: Vec<f64>,
    pub y11: Vec<f64>,
}

/// Compute the overlay for a selection on the current view.
///
/// `None` yields the empty overlay. An index past the end of the view fails
/// with `IndexOutOfRange`; the caller decides how to recover.
pub fn compute_overlay(
    view: &DerivedView,
    dataset: &Dataset,
    gas1: &GasId,
    gas2: &GasId,
    selected_index: Option<usize>,
) -> Result<ErrorOverlay> {
    let Some(index) = selected_index else {
        return Ok(ErrorOverlay::Empty);
    };

    let out_of_range = || SorbError::IndexOutOfRange {
        index,
        len: view.len(),
    };
    let material = view.labels.get(index).ok_or_else(out_of_range)?;
    let (x0, y0) = view.loading_point(index).ok_or_else(out_of_range)?;
    let (x1, y1) = view.henry_point(index).ok_or_else(out_of_range)?;

    let first = dataset.table(gas1)?;
    let second = dataset.table(gas2)?;
    let missing = |gas: &GasId| {
        SorbError::InvalidRecord(format!("{} has no record for {}", gas, material))
    };
    let r1 = first.get(material).ok_or_else(|| missing(gas1))?;
    let r2 = second.get(material).ok_or_else(|| missing(gas2))?;

    Ok(ErrorOverlay::Selected {
        index,
        loading: ErrorCross::around(x0, y0, r1.loading_error, r2.loading_error),
        henry: ErrorCross::around(x1, y1, r1.henry_error, r2.henry_error),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::record;
    use crate::view::build_view;

    fn scenario() -> (Dataset, DerivedView) {
        let dataset = Dataset::from_records(vec![
            record("A", "m1", &[1.0, 2.0], 10.0, (0.1, 0.2)),
            record("B", "m1", &[3.0, 4.0], 20.0, (0.3, 0.4)),
        ])
        .unwrap();
        let view = build_view(&dataset, &"A".into(), &"B".into(), 0).unwrap();
        (dataset, view)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn no_selection_is_empty() {
        let (dataset, view) = scenario();
        let overlay = compute_overlay(&view, &dataset, &"A".into(), &"B".into(), None).unwrap();
        assert!(overlay.is_empty());
        assert_eq!(overlay.columns(), OverlayColumns::default());
    }

    #[test]
    fn selected_point_gets_error_cross() {
        let (dataset, view) = scenario();
        let overlay =
            compute_overlay(&view, &dataset, &"A".into(), &"B".into(), Some(0)).unwrap();

        let ErrorOverlay::Selected {
            index,
            loading,
            henry,
        } = overlay
        else {
            panic!("expected a selected overlay");
        };
        assert_eq!(index, 0);
        assert_eq!(loading.center(), (1.0, 3.0));
        assert!(approx(loading.x_half_length(), 0.1));
        assert!(approx(loading.y_half_length(), 0.3));
        assert_eq!(henry.center(), (10.0, 20.0));
        assert!(approx(henry.x_half_length(), 0.2));
        assert!(approx(henry.y_half_length(), 0.4));
    }

    #[test]
    fn columns_hold_both_arms() {
        let (dataset, view) = scenario();
        let columns = compute_overlay(&view, &dataset, &"A".into(), &"B".into(), Some(0))
            .unwrap()
            .columns();

        // horizontal arm, then vertical arm
        assert_eq!(columns.x00, vec![1.0 - 0.1, 1.0]);
        assert_eq!(columns.y00, vec![3.0, 3.0 - 0.3]);
        assert_eq!(columns.x01, vec![1.0 + 0.1, 1.0]);
        assert_eq!(columns.y01, vec![3.0, 3.0 + 0.3]);
        assert_eq!(columns.x10, vec![10.0 - 0.2, 10.0]);
        assert_eq!(columns.y11, vec![20.0, 20.0 + 0.4]);
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let (dataset, view) = scenario();
        let err =
            compute_overlay(&view, &dataset, &"A".into(), &"B".into(), Some(1)).unwrap_err();
        assert_eq!(err, SorbError::IndexOutOfRange { index: 1, len: 1 });
    }

    #[test]
    fn overlay_serializes_with_kind_tag() {
        let json = serde_json::to_value(ErrorOverlay::Empty).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "empty" }));
    }
}
