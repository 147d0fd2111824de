//! Page view components

pub mod app_layout;
pub mod gallery;
pub mod gallery_modal;
pub mod header;
pub mod helpers;
pub mod icons;
pub mod song_list;
pub mod video_player;

pub use app_layout::{AppLayoutView, SectionView};
pub use gallery::{AlbumCoverView, GalleryView};
pub use gallery_modal::GalleryModalView;
pub use header::{NavItem, SiteHeaderView};
pub use helpers::{LoadingSpinner, PlaceholderMessage};
pub use icons::{AlertTriangleIcon, ImageIcon, MusicIcon, PlayIcon, XIcon};
pub use song_list::SongListView;
pub use video_player::{VideoPlayerView, VIDEO_PLAYER_ID};
