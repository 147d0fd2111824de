//! Embedded video player view component

use crate::components::icons::XIcon;
use dioxus::prelude::*;

/// Element id used to scroll the player into view
pub const VIDEO_PLAYER_ID: &str = "video-player";

/// Embedded player (pure, props-based).
///
/// The iframe source is empty while nothing plays, which also stops
/// playback when the player closes.
#[component]
pub fn VideoPlayerView(embed_url: String, on_close: EventHandler<()>) -> Element {
    let is_open = !embed_url.is_empty();

    rsx! {
        div {
            id: VIDEO_PLAYER_ID,
            class: if is_open { "video-player active" } else { "video-player" },
            button {
                class: "close-video",
                aria_label: "Close video",
                onclick: move |_| on_close.call(()),
                XIcon { class: "icon" }
            }
            div { class: "video-frame",
                iframe {
                    id: "videoFrame",
                    src: "{embed_url}",
                    title: "Video player",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                    allowfullscreen: true,
                }
            }
        }
    }
}
