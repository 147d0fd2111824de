//! Page-level UI state store

use dioxus::prelude::*;
use roselia_common::{ModalState, PlayerState, SongId};

/// UI state for the single fan-site page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct PageUiState {
    /// Song player state machine
    pub player: PlayerState,
    /// Gallery lightbox
    pub modal: ModalState,
    /// Header switches to its compact style after scrolling
    pub compact_header: bool,
    /// Section whose nav link is highlighted
    pub active_section: Option<String>,
    /// Last song whose video link could not be played
    pub rejected_song: Option<SongId>,
}
