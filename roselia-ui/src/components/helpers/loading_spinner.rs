//! Loading spinner component

use dioxus::prelude::*;

/// Shown while a section's manifest is being fetched
#[component]
pub fn LoadingSpinner(
    /// Message to display next to spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "spinner" }
            p { class: "loading-text", "{message}" }
        }
    }
}
