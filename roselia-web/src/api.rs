//! Manifest fetching.
//!
//! Each section loads independently; a failure is returned to the caller,
//! logged, and never retried.

use roselia_common::manifest::{parse_album, parse_directory_listing, parse_gallery, parse_songs};
use roselia_common::{GallerySource, ManifestError, SiteConfig, SongColumns};
use tracing::{error, info};

/// Resolve `path` against the page URL so relative manifest paths work
/// wherever the site is hosted.
fn resolve_url(path: &str) -> String {
    let base = web_sys_x::window().and_then(|w| w.location().href().ok());
    match base {
        Some(base) => web_sys_x::Url::new_with_base(path, &base)
            .map(|url| url.href())
            .unwrap_or_else(|_| path.to_string()),
        None => path.to_string(),
    }
}

/// GET `path` and return the body as text. Non-success statuses are errors.
async fn fetch_text(path: &str) -> Result<String, ManifestError> {
    let resp = reqwest::get(resolve_url(path))
        .await
        .map_err(|e| ManifestError::Network(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(ManifestError::Status(resp.status().as_u16()));
    }

    resp.text()
        .await
        .map_err(|e| ManifestError::Parse(e.to_string()))
}

/// Fetch and parse the song manifest
pub async fn fetch_songs(config: &SiteConfig) -> Result<SongColumns, ManifestError> {
    let text = fetch_text(&config.songs_manifest_url)
        .await
        .inspect_err(|e| error!("Failed to load songs: {}", e))?;
    let songs = parse_songs(&text, &config.placeholder_marker);
    info!("Loaded {} songs", songs.len());
    Ok(songs)
}

/// Fetch gallery image paths from the configured source
pub async fn fetch_gallery(config: &SiteConfig) -> Result<Vec<String>, ManifestError> {
    let images = match config.gallery_source {
        GallerySource::Manifest => {
            let text = fetch_text(&config.gallery_manifest_url).await;
            text.map(|t| parse_gallery(&t))
        }
        GallerySource::DirectoryListing => {
            let json = fetch_text(&config.gallery_listing_url).await;
            json.and_then(|j| parse_directory_listing(&j, &config.photo_directory))
        }
    }
    .inspect_err(|e| error!("Failed to load gallery: {}", e))?;

    info!(
        "Loaded {} gallery images from {:?}",
        images.len(),
        config.gallery_source
    );
    Ok(images)
}

/// Fetch the album cover path; `None` if the manifest is blank
pub async fn fetch_album(config: &SiteConfig) -> Result<Option<String>, ManifestError> {
    let text = fetch_text(&config.album_manifest_url)
        .await
        .inspect_err(|e| error!("Failed to load album image: {}", e))?;
    Ok(parse_album(&text))
}
