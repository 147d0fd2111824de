//! Video identifier extraction for YouTube-style URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::VideoIdError;

/// Length of a canonical video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// Covers the short-link, `v/`, user-upload, `embed/` and `watch?` forms.
/// The identifier is always the last capture group.
static VIDEO_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*((youtu\.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*")
        .expect("video URL pattern is valid")
});

/// Canonical 11-character video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Autoplaying embed URL for the player iframe.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video identifier from a URL.
///
/// Fails when no known URL shape matches or the captured identifier is not
/// exactly [`VIDEO_ID_LEN`] characters long.
pub fn extract_video_id(url: &str) -> Result<VideoId, VideoIdError> {
    let captured = VIDEO_URL_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(7))
        .ok_or_else(|| VideoIdError::NoMatch(url.to_string()))?
        .as_str();

    let len = captured.chars().count();
    if len != VIDEO_ID_LEN {
        return Err(VideoIdError::InvalidLength {
            id: captured.to_string(),
            len,
        });
    }

    Ok(VideoId(captured.to_string()))
}
