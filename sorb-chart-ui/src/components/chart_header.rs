//! Dashboard header with title and usage instructions.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Short usage text shown under the title
    #[props(default = String::new())]
    pub instructions: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; max-width: 800px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.instructions.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: #444;",
                    "{props.instructions}"
                }
            }
        }
    }
}
