use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shown under the message, e.g. which fixture to add
    #[props(default = String::new())]
    pub hint: String,
}

/// Replaces the chart when data could not be loaded or a figure could not
/// be built.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-radius: 4px; border: 1px solid #FFCC80;",
            strong { "Unable to draw chart: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #6D4C41;",
                    "{props.hint}"
                }
            }
        }
    }
}
