//! Dropdown for choosing which embedded dataset to plot.

use crate::state::AppState;
use dioxus::prelude::*;

/// Reads the datasets from AppState; a change rebuilds the figure with
/// every year visible.
#[component]
pub fn DatasetSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options: Vec<(String, String)> = state
        .datasets
        .read()
        .iter()
        .map(|dataset| (dataset.key.clone(), dataset.label.clone()))
        .collect();
    let selected = (state.selected_dataset)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_dataset.set(evt.value());
        state.rebuild();
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "dataset-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Dataset: "
            }
            select {
                id: "dataset-select",
                onchange: on_change,
                for (key, label) in options {
                    option {
                        value: "{key}",
                        selected: key == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
