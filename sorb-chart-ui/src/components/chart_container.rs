//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Number of materials plotted; zero shows an empty-state hint
    pub point_count: usize,
    /// Side length in pixels
    #[props(default = 500)]
    pub size: u32,
}

/// A square container div for one D3.js scatter chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "width: {0}px; min-height: {0}px; position: relative;",
        props.size
    );

    rsx! {
        div {
            style: "{style}",
            if props.point_count == 0 {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "No materials measured for both gases"
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
