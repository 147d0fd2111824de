//! Song player state machine.
//!
//! The page has a single embedded video player. Selecting a song starts it,
//! selecting the same song again stops it, and selecting another song
//! switches to it. Transitions are pure: they take the current state and
//! return the next one together with the effects the view has to apply.

use crate::manifest::SongId;
use crate::video_id::{extract_video_id, VideoId};

/// Delay before the player is scrolled into view after it opens
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 100;

/// Current player state. The active column is always the column of the
/// active song.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlayerState {
    #[default]
    Idle,
    Playing { song: SongId, video: VideoId },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEffect {
    /// Remove the `active` marker from a song and `active-column` from its column
    Deactivate { song: SongId, column: usize },
    /// Mark a song and its column active and point the player at `embed_url`
    Activate {
        song: SongId,
        column: usize,
        embed_url: String,
    },
    /// Bring the player into view once `delay_ms` has passed
    ScrollPlayerIntoView { delay_ms: u64 },
    /// The selected song's URL has no usable video identifier
    SelectionRejected { song: SongId, url: String },
}

/// Result of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PlayerState,
    pub effects: Vec<PlayerEffect>,
}

impl Transition {
    fn unchanged(state: PlayerState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

impl PlayerState {
    pub fn active_song(&self) -> Option<SongId> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Playing { song, .. } => Some(*song),
        }
    }

    pub fn active_column(&self) -> Option<usize> {
        self.active_song().map(|song| song.column)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, PlayerState::Playing { .. })
    }

    pub fn is_song_active(&self, song: SongId) -> bool {
        self.active_song() == Some(song)
    }

    pub fn is_column_active(&self, column: usize) -> bool {
        self.active_column() == Some(column)
    }

    /// Player iframe source; empty while idle.
    pub fn embed_url(&self) -> String {
        match self {
            PlayerState::Idle => String::new(),
            PlayerState::Playing { video, .. } => video.embed_url(),
        }
    }

    /// The user selected `song`, whose manifest URL is `url`.
    pub fn select(&self, song: SongId, url: &str, scroll_delay_ms: u64) -> Transition {
        if self.is_song_active(song) {
            return self.close();
        }

        let video = match extract_video_id(url) {
            Ok(video) => video,
            Err(_) => {
                return Transition {
                    state: self.clone(),
                    effects: vec![PlayerEffect::SelectionRejected {
                        song,
                        url: url.to_string(),
                    }],
                };
            }
        };

        let mut effects = Vec::with_capacity(3);
        if let Some(previous) = self.active_song() {
            effects.push(PlayerEffect::Deactivate {
                song: previous,
                column: previous.column,
            });
        }
        effects.push(PlayerEffect::Activate {
            song,
            column: song.column,
            embed_url: video.embed_url(),
        });
        effects.push(PlayerEffect::ScrollPlayerIntoView {
            delay_ms: scroll_delay_ms,
        });

        Transition {
            state: PlayerState::Playing { song, video },
            effects,
        }
    }

    /// Stop playback (close button, Escape, or re-selecting the active song).
    pub fn close(&self) -> Transition {
        match self.active_song() {
            None => Transition::unchanged(PlayerState::Idle),
            Some(song) => Transition {
                state: PlayerState::Idle,
                effects: vec![PlayerEffect::Deactivate {
                    song,
                    column: song.column,
                }],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL_A: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
    const URL_B: &str = "https://youtu.be/9bZkp7q19f0";

    fn a() -> SongId {
        SongId::new(0, 1)
    }

    fn b() -> SongId {
        SongId::new(2, 0)
    }

    #[test]
    fn test_default_is_idle() {
        let state = PlayerState::default();
        assert!(!state.is_playing());
        assert_eq!(state.embed_url(), "");
        assert_eq!(state.active_column(), None);
    }

    #[test]
    fn test_select_from_idle() {
        let t = PlayerState::Idle.select(a(), URL_A, DEFAULT_SCROLL_DELAY_MS);
        assert!(t.state.is_song_active(a()));
        assert!(t.state.is_column_active(0));
        assert_eq!(
            t.state.embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
        assert_eq!(
            t.effects,
            vec![
                PlayerEffect::Activate {
                    song: a(),
                    column: 0,
                    embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1".into(),
                },
                PlayerEffect::ScrollPlayerIntoView { delay_ms: 100 },
            ]
        );
    }

    #[test]
    fn test_select_same_song_twice_returns_to_idle() {
        let playing = PlayerState::Idle.select(a(), URL_A, 100).state;
        let t = playing.select(a(), URL_A, 100);
        assert_eq!(t.state, PlayerState::Idle);
        assert_eq!(t.state.embed_url(), "");
        assert_eq!(
            t.effects,
            vec![PlayerEffect::Deactivate {
                song: a(),
                column: 0
            }]
        );
    }

    #[test]
    fn test_switch_songs() {
        let playing = PlayerState::Idle.select(a(), URL_A, 100).state;
        let t = playing.select(b(), URL_B, 100);

        assert!(t.state.is_song_active(b()));
        assert!(!t.state.is_song_active(a()));
        assert_eq!(t.state.active_column(), Some(2));
        assert!(!t.state.is_column_active(0));
        assert_eq!(
            t.effects[0],
            PlayerEffect::Deactivate {
                song: a(),
                column: 0
            }
        );
        assert!(matches!(t.effects[1], PlayerEffect::Activate { song, column: 2, .. } if song == b()));
    }

    #[test]
    fn test_switch_within_same_column() {
        let first = SongId::new(1, 0);
        let second = SongId::new(1, 3);
        let playing = PlayerState::Idle.select(first, URL_A, 100).state;
        let t = playing.select(second, URL_B, 100);
        assert!(t.state.is_song_active(second));
        assert_eq!(t.state.active_column(), Some(1));
    }

    #[test]
    fn test_rejected_selection_keeps_state() {
        let playing = PlayerState::Idle.select(a(), URL_A, 100).state;
        let t = playing.select(b(), "https://www.youtube.com/watch?v=example", 100);
        assert_eq!(t.state, playing);
        assert_eq!(
            t.effects,
            vec![PlayerEffect::SelectionRejected {
                song: b(),
                url: "https://www.youtube.com/watch?v=example".into(),
            }]
        );
    }

    #[test]
    fn test_rejected_selection_from_idle() {
        let t = PlayerState::Idle.select(a(), "not a url", 100);
        assert_eq!(t.state, PlayerState::Idle);
        assert_eq!(t.effects.len(), 1);
    }

    #[test]
    fn test_close_while_playing() {
        let playing = PlayerState::Idle.select(b(), URL_B, 100).state;
        let t = playing.close();
        assert_eq!(t.state, PlayerState::Idle);
        assert_eq!(
            t.effects,
            vec![PlayerEffect::Deactivate {
                song: b(),
                column: 2
            }]
        );
    }

    #[test]
    fn test_close_while_idle_is_noop() {
        let t = PlayerState::Idle.close();
        assert_eq!(t.state, PlayerState::Idle);
        assert!(t.effects.is_empty());
    }
}
