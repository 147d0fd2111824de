use dioxus::prelude::*;
use roselia_common::{ModalClick, ModalState, PlayerEffect, ScrollTracker, SongId, Transition};
use roselia_ui::stores::{PageUiState, PageUiStateStoreExt};
use roselia_ui::wasm_utils::{scroll_into_view_centered, scroll_offset, section_bounds, sleep_ms};
use roselia_ui::VIDEO_PLAYER_ID;
use tracing::{debug, info, warn};

/// Applies page transitions to the page store.
///
/// The state machines in `roselia-common` decide what happens; this type
/// stores the result and carries out the effects that rendering alone does
/// not cover (delayed scrolling, logging).
#[derive(Clone, Copy)]
pub struct PageController {
    store: Store<PageUiState>,
    scroll_delay_ms: u64,
}

impl PageController {
    pub fn new(store: Store<PageUiState>, scroll_delay_ms: u64) -> Self {
        Self {
            store,
            scroll_delay_ms,
        }
    }

    /// A song entry was clicked
    pub fn select_song(&self, song: SongId, url: &str) {
        let current = self.store.player().read().clone();
        let transition = current.select(song, url, self.scroll_delay_ms);
        self.apply(transition);
    }

    /// Close button or Escape
    pub fn close_player(&self) {
        let current = self.store.player().read().clone();
        if current.is_playing() {
            self.apply(current.close());
        }
    }

    pub fn open_image(&self, path: String) {
        info!("Opening gallery image: {}", path);
        self.store.modal().set(ModalState::open(path));
    }

    pub fn modal_click(&self, click: ModalClick) {
        let current = self.store.modal().read().clone();
        let next = current.click(click);
        if next != current {
            debug!("Gallery lightbox closed by {:?}", click);
            self.store.modal().set(next);
        }
    }

    pub fn close_modal(&self) {
        if self.store.modal().read().is_open() {
            self.store.modal().set(ModalState::Closed);
        }
    }

    /// Escape closes both the player and the lightbox
    pub fn on_escape(&self) {
        self.close_player();
        self.close_modal();
    }

    /// Recompute header and nav highlight for the current scroll offset
    pub fn on_scroll(&self, tracker: &ScrollTracker, section_ids: &[String]) {
        let offset = scroll_offset();
        let sections = section_bounds(section_ids.iter().map(String::as_str));
        let previous = self.store.active_section().read().clone();
        let update = tracker.update(offset, &sections, previous.as_deref());

        if *self.store.compact_header().read() != update.compact_header {
            self.store.compact_header().set(update.compact_header);
        }
        if previous != update.active_section {
            self.store.active_section().set(update.active_section);
        }
    }

    fn apply(&self, transition: Transition) {
        let Transition { state, effects } = transition;
        self.store.player().set(state);

        for effect in effects {
            match effect {
                PlayerEffect::Deactivate { song, column } => {
                    debug!("Deactivated song {} in column {}", song, column);
                }
                PlayerEffect::Activate {
                    song,
                    column,
                    embed_url,
                } => {
                    info!("Playing song {} (column {}): {}", song, column, embed_url);
                    self.store.rejected_song().set(None);
                }
                PlayerEffect::ScrollPlayerIntoView { delay_ms } => {
                    spawn(async move {
                        sleep_ms(delay_ms).await;
                        scroll_into_view_centered(VIDEO_PLAYER_ID);
                    });
                }
                PlayerEffect::SelectionRejected { song, url } => {
                    warn!("No playable video for song {}: {:?}", song, url);
                    self.store.rejected_song().set(Some(song));
                }
            }
        }
    }
}
