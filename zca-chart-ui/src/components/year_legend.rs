//! One legend button per year, styled by emphasis tier.
//!
//! Click toggles the year in every region; double click shows only that year.

use crate::state::AppState;
use dioxus::prelude::*;
use zca_overlay::{LegendEntry, VisibilityCommand};

#[component]
pub fn YearLegend() -> Element {
    let state = use_context::<AppState>();
    let entries: Vec<LegendEntry> = match &*state.figure.read() {
        Some(figure) => figure.legend_entries(),
        None => Vec::new(),
    };

    rsx! {
        div {
            style: "margin-top: 12px; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px; display: flex; gap: 6px 12px; flex-wrap: wrap;",
            for entry in entries {
                YearButton { key: "{entry.year}", entry }
            }
        }
    }
}

#[component]
fn YearButton(entry: LegendEntry) -> Element {
    let mut state = use_context::<AppState>();
    let year = entry.year;
    let swatch = format!(
        "display: inline-block; width: 16px; height: {}px; background: {}; opacity: {};",
        entry.style.width + 1,
        entry.style.color.hex(),
        entry.style.opacity
    );
    let tier_label = entry.tier.label();
    let text_color = if entry.visible { "#212121" } else { "#BDBDBD" };

    rsx! {
        button {
            title: "{tier_label}",
            style: "display: flex; align-items: center; gap: 4px; border: none; background: none; cursor: pointer; color: {text_color};",
            onclick: move |_| state.apply(VisibilityCommand::ToggleYear(year)),
            ondoubleclick: move |_| state.apply(VisibilityCommand::IsolateYear(year)),
            span { style: "{swatch}" }
            "{year}"
        }
    }
}
