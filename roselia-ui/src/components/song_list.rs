//! Song list view - the manifest's songs laid out in columns
//!
//! Active markers come from the player state: the playing song gets
//! `active`, its column `active-column`, and the container `playing`.

use crate::components::icons::{AlertTriangleIcon, MusicIcon, PlayIcon};
use dioxus::prelude::*;
use roselia_common::{PlayerState, SongColumns, SongEntry, SongId};

/// Song columns (pure, props-based)
#[component]
pub fn SongListView(
    songs: SongColumns,
    player: PlayerState,
    /// Song whose link was last rejected as unplayable
    rejected_song: Option<SongId>,
    on_song_select: EventHandler<SongId>,
) -> Element {
    let container_class = if player.is_playing() {
        "songs-grid playing"
    } else {
        "songs-grid"
    };

    rsx! {
        div { id: "songs-container", class: "{container_class}",
            for (column , entries) in songs.rendered() {
                div {
                    key: "{column}",
                    class: if player.is_column_active(column) { "song-column active-column" } else { "song-column" },
                    "data-column": "{column}",
                    ul { class: "song-list",
                        for (index , entry) in entries.iter().enumerate() {
                            SongRow {
                                key: "{column}-{index}",
                                id: SongId::new(column, index),
                                entry: entry.clone(),
                                is_active: player.is_song_active(SongId::new(column, index)),
                                is_rejected: rejected_song == Some(SongId::new(column, index)),
                                on_select: on_song_select,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single entry. Entries without a video get a "coming soon" label and
/// no click handler.
#[component]
fn SongRow(
    id: SongId,
    entry: SongEntry,
    is_active: bool,
    is_rejected: bool,
    on_select: EventHandler<SongId>,
) -> Element {
    if !entry.has_video {
        return rsx! {
            li { class: "song-item no-video", "data-song-id": "{id}",
                span { class: "song-title", "{entry.title}" }
                span { class: "no-video-label",
                    MusicIcon { class: "icon-sm" }
                    " coming soon"
                }
            }
        };
    }

    let row_class = if is_active {
        "song-item active"
    } else {
        "song-item"
    };

    rsx! {
        li {
            class: "{row_class}",
            "data-song-id": "{id}",
            onclick: move |_| on_select.call(id),
            span { class: "song-title", "{entry.title}" }
            if is_rejected {
                span { class: "video-unavailable",
                    AlertTriangleIcon { class: "icon-sm" }
                    " video unavailable"
                }
            } else {
                span { class: "play-icon",
                    PlayIcon { class: "icon-sm" }
                }
            }
        }
    }
}
