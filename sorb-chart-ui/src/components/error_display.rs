//! Error and notice display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Non-fatal notices render in a softer style
    #[props(default = false)]
    pub notice: bool,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let (style, prefix) = if props.notice {
        (
            "padding: 8px 12px; margin: 8px 0; background: #FFF8E1; color: #8D6E00; border-radius: 4px; border: 1px solid #FFE082;",
            "Selection rejected: ",
        )
    } else {
        (
            "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            "Error: ",
        )
    };

    rsx! {
        div {
            style: "{style}",
            strong { "{prefix}" }
            "{props.message}"
        }
    }
}
