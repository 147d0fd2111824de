//! roselia-common - Pure page logic for the Roselia fan site
//!
//! Manifest parsing, video identifier extraction, and the state machines
//! behind the song player, gallery lightbox and scroll-driven navigation.
//! Nothing here touches the DOM or the network.

pub mod config;
pub mod error;
pub mod manifest;
pub mod modal;
pub mod player;
pub mod scroll;
pub mod video_id;

pub use config::{GallerySource, ImageFallback, NavSection, SiteConfig};
pub use error::{ConfigError, ManifestError, VideoIdError};
pub use manifest::{
    parse_album, parse_directory_listing, parse_gallery, parse_songs, PlacedSong, SongColumns,
    SongEntry, SongId,
};
pub use modal::{ModalClick, ModalState};
pub use player::{PlayerEffect, PlayerState, Transition};
pub use scroll::{ScrollTracker, ScrollUpdate, SectionBounds};
pub use video_id::{extract_video_id, VideoId};
