//! Site configuration.
//!
//! Every field has a default, so a deployment only lists what it changes.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::manifest::DEFAULT_PLACEHOLDER_MARKER;
use crate::player::DEFAULT_SCROLL_DELAY_MS;
use crate::scroll::{ScrollTracker, DEFAULT_COMPACT_HEADER_OFFSET, DEFAULT_SECTION_LOOKAHEAD};

/// Where the gallery gets its list of images from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GallerySource {
    /// `gallery.txt`, one path per line
    #[default]
    Manifest,
    /// A server endpoint returning a JSON array of filenames
    DirectoryListing,
}

/// What to show when an image fails to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFallback {
    Hide,
    Replace { src: String, alt: String },
}

/// Navigation entry, linked to the page section with the same id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSection {
    pub id: String,
    pub label: String,
}

impl NavSection {
    fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_title: String,
    pub songs_manifest_url: String,
    pub gallery_manifest_url: String,
    pub album_manifest_url: String,
    pub gallery_source: GallerySource,
    /// Endpoint used when `gallery_source` is `directory_listing`
    pub gallery_listing_url: String,
    /// Prefix for filenames returned by the listing endpoint
    pub photo_directory: String,
    pub gallery_placeholder_image: String,
    pub album_placeholder_image: String,
    /// Song URLs containing this text are treated as "no video yet"
    pub placeholder_marker: String,
    pub sections: Vec<NavSection>,
    pub compact_header_offset: f64,
    pub section_lookahead: f64,
    pub clear_nav_on_gap: bool,
    pub scroll_delay_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: "Roselia".to_string(),
            songs_manifest_url: "songs.txt".to_string(),
            gallery_manifest_url: "gallery.txt".to_string(),
            album_manifest_url: "album.txt".to_string(),
            gallery_source: GallerySource::Manifest,
            gallery_listing_url: "get_gallery.php".to_string(),
            photo_directory: "material/photo".to_string(),
            gallery_placeholder_image: "https://via.placeholder.com/600x400?text=Image+Not+Found"
                .to_string(),
            album_placeholder_image:
                "https://via.placeholder.com/800x400?text=Album+Image+Not+Found".to_string(),
            placeholder_marker: DEFAULT_PLACEHOLDER_MARKER.to_string(),
            sections: vec![
                NavSection::new("home", "Home"),
                NavSection::new("about", "About"),
                NavSection::new("songs", "Songs"),
                NavSection::new("gallery", "Gallery"),
                NavSection::new("album", "Album"),
            ],
            compact_header_offset: DEFAULT_COMPACT_HEADER_OFFSET,
            section_lookahead: DEFAULT_SECTION_LOOKAHEAD,
            clear_nav_on_gap: false,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `json`, falling back to the defaults if it is unusable.
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid site config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_marker.is_empty() {
            return Err(ConfigError::Config(
                "placeholder_marker must not be empty".to_string(),
            ));
        }
        if self.compact_header_offset < 0.0 || self.section_lookahead < 0.0 {
            return Err(ConfigError::Config(
                "scroll offsets must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scroll_tracker(&self) -> ScrollTracker {
        ScrollTracker {
            compact_header_offset: self.compact_header_offset,
            lookahead: self.section_lookahead,
            clear_on_gap: self.clear_nav_on_gap,
        }
    }

    /// Listing-driven galleries hide broken images, manifest-driven ones
    /// show a placeholder.
    pub fn gallery_fallback(&self) -> ImageFallback {
        match self.gallery_source {
            GallerySource::DirectoryListing => ImageFallback::Hide,
            GallerySource::Manifest => ImageFallback::Replace {
                src: self.gallery_placeholder_image.clone(),
                alt: "Image not found".to_string(),
            },
        }
    }

    pub fn album_fallback(&self) -> ImageFallback {
        ImageFallback::Replace {
            src: self.album_placeholder_image.clone(),
            alt: "Album image not found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.songs_manifest_url, "songs.txt");
        assert_eq!(config.gallery_source, GallerySource::Manifest);
        assert_eq!(config.scroll_delay_ms, 100);
        assert_eq!(config.scroll_tracker(), ScrollTracker::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            SiteConfig::from_json(r#"{"gallery_source": "directory_listing", "clear_nav_on_gap": true}"#)
                .unwrap();
        assert_eq!(config.gallery_source, GallerySource::DirectoryListing);
        assert!(config.scroll_tracker().clear_on_gap);
        assert_eq!(config.album_manifest_url, "album.txt");
        assert_eq!(config.gallery_fallback(), ImageFallback::Hide);
    }

    #[test]
    fn test_manifest_gallery_uses_placeholder() {
        let config = SiteConfig::default();
        assert!(matches!(
            config.gallery_fallback(),
            ImageFallback::Replace { ref src, .. } if src.contains("placeholder")
        ));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let config = SiteConfig::from_json_or_default("{not json");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = SiteConfig::from_json(r#"{"placeholder_marker": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Config(_)));
    }

    #[test]
    fn test_custom_sections() {
        let config = SiteConfig::from_json(
            r#"{"sections": [{"id": "songs", "label": "Песни"}]}"#,
        )
        .unwrap();
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].label, "Песни");
    }
}
