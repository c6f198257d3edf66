//! Reusable Dioxus RSX components for the sorbent explorer.

mod capacity_range_slider;
mod chart_container;
mod chart_header;
mod error_display;
mod gas_pair_selector;
mod loading_spinner;
mod material_details;
mod material_list;
mod pressure_slider;

pub use capacity_range_slider::CapacityRangeSlider;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use gas_pair_selector::GasPairSelector;
pub use loading_spinner::LoadingSpinner;
pub use material_details::MaterialDetailsPanel;
pub use material_list::{material_rows, selectivity_text, MaterialList, MaterialRow};
pub use pressure_slider::PressureSlider;
