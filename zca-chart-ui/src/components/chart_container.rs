//! Grid cell holding one pre-rendered SVG panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    pub id: String,
    /// Inline SVG markup
    pub svg: String,
    #[props(default = 240)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; border: 1px solid #EEE; background: #FFF;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            dangerous_inner_html: "{props.svg}",
        }
    }
}
