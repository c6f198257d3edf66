//! Core data model and selection logic for the sorbent explorer dashboard.
//!
//! This crate turns an in-memory adsorption [`Dataset`] into the column sets
//! the charts draw, and keeps the dashboard's selection state consistent:
//!
//! - [`view`]: loading/Henry projection of a gas pair at a pressure step,
//!   plus the working-capacity projection
//! - [`overlay`]: error-bar crosses for a single selected material
//! - [`panel`]: the control panel state machine driving both
//! - [`config`]: gas-pair presets and pressure slider range
//!
//! Charting, layout and widget rendering belong to `sorb-chart-ui`; loading
//! the dataset belongs to `sorb-db`.
//!
//! # Usage
//!
//! ```rust
//! use sorb_core::{build_view, compute_overlay, Dataset, GasId, MaterialRecord};
//!
//! let record = |gas: &str, loading: f64, henry: f64, err: f64| MaterialRecord {
//!     gas: GasId::new(gas),
//!     material: "m1".to_string(),
//!     loading: vec![loading],
//!     henry,
//!     loading_error: err,
//!     henry_error: err,
//!     loading_isotherms: 3.0,
//!     henry_isotherms: 3.0,
//! };
//! let dataset = Dataset::from_records(vec![
//!     record("A", 1.0, 10.0, 0.1),
//!     record("B", 3.0, 20.0, 0.3),
//! ])
//! .unwrap();
//!
//! let (a, b) = (GasId::new("A"), GasId::new("B"));
//! let view = build_view(&dataset, &a, &b, 0).unwrap();
//! assert_eq!(view.labels, vec!["m1"]);
//!
//! let overlay = compute_overlay(&view, &dataset, &a, &b, Some(0)).unwrap();
//! assert!(!overlay.is_empty());
//! ```

pub mod config;
pub mod dataset;
pub mod details;
pub mod error;
pub mod gas;
pub mod overlay;
pub mod panel;
pub mod view;

pub use config::{DashboardConfig, GasPairPreset};
pub use dataset::{Dataset, GasTable, MaterialRecord};
pub use details::{material_details, MaterialDetails};
pub use error::{Result, SorbError};
pub use gas::{AxisLabels, GasId, GasPair};
pub use overlay::{compute_overlay, ErrorCross, ErrorOverlay, OverlayColumns, Segment};
pub use panel::{ControlPanel, ControlPanelState, PanelEvent, PanelUpdate};
pub use view::{build_view, build_working_capacity, DerivedView, WorkingCapacityView};
