//! Placeholder message component

use crate::components::icons::MusicIcon;
use dioxus::prelude::*;

/// Shown in place of a section whose manifest could not be loaded
#[component]
pub fn PlaceholderMessage(message: String) -> Element {
    rsx! {
        div { class: "placeholder-message",
            div { class: "placeholder-icon",
                MusicIcon { class: "icon-lg" }
            }
            div { class: "placeholder-text", "{message}" }
        }
    }
}
