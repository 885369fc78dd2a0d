use crate::state::AppState;
use dioxus::prelude::*;
use zca_overlay::VisibilityCommand;

/// "Show All" / "Hide All" buttons. The map cell is not affected.
#[component]
pub fn VisibilityControls() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            button {
                onclick: move |_| state.apply(VisibilityCommand::ShowAll),
                "Show All"
            }
            button {
                onclick: move |_| state.apply(VisibilityCommand::HideAll),
                "Hide All"
            }
        }
    }
}
