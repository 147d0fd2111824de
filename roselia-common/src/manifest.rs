//! Parsers for the plain-text manifests that drive the page.
//!
//! - `songs.txt`: one `TITLE|VIDEO_URL` per line, URL optional
//! - `gallery.txt`: one image path per line
//! - `album.txt`: the first non-blank line is the album cover path
//!
//! A directory listing (JSON array of filenames) can stand in for
//! `gallery.txt`.

use std::fmt;

use crate::error::ManifestError;

/// Number of columns the song list is split into
pub const SONG_COLUMNS: usize = 3;

/// Substring that marks a manifest URL as a stand-in rather than a real video
pub const DEFAULT_PLACEHOLDER_MARKER: &str = "example";

/// Position of a rendered song: column, then index within that column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SongId {
    pub column: usize,
    pub index: usize,
}

impl SongId {
    pub fn new(column: usize, index: usize) -> Self {
        Self { column, index }
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.column, self.index)
    }
}

/// One line of the song manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEntry {
    pub title: String,
    pub video_url: Option<String>,
    pub has_video: bool,
}

impl SongEntry {
    /// Parse a single manifest line, flagging URLs that contain `placeholder_marker`.
    pub fn parse_line(line: &str, placeholder_marker: &str) -> Self {
        let (title, url) = line.split_once('|').unwrap_or((line, ""));
        let title = title.trim().to_string();
        let url = url.trim();

        let has_video = !url.is_empty() && !url.contains(placeholder_marker);
        let video_url = (!url.is_empty()).then(|| url.to_string());

        Self {
            title,
            video_url,
            has_video,
        }
    }
}

/// A song together with its rendered position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedSong {
    pub id: SongId,
    pub entry: SongEntry,
}

/// Songs partitioned into fixed contiguous columns.
///
/// Every column holds `ceil(total / 3)` lines, so the last columns may be
/// shorter or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongColumns {
    columns: [Vec<SongEntry>; SONG_COLUMNS],
}

impl SongColumns {
    pub fn column(&self, column: usize) -> &[SongEntry] {
        self.columns.get(column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: SongId) -> Option<&SongEntry> {
        self.columns.get(id.column)?.get(id.index)
    }

    /// Non-empty columns with their column index, in order.
    pub fn rendered(&self) -> impl Iterator<Item = (usize, &[SongEntry])> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, songs)| !songs.is_empty())
            .map(|(idx, songs)| (idx, songs.as_slice()))
    }

    /// All songs with their ids, column by column.
    pub fn songs(&self) -> impl Iterator<Item = PlacedSong> + '_ {
        self.columns.iter().enumerate().flat_map(|(column, songs)| {
            songs.iter().enumerate().map(move |(index, entry)| PlacedSong {
                id: SongId::new(column, index),
                entry: entry.clone(),
            })
        })
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}

/// Parse the song manifest into columns.
///
/// Blank lines still count towards the column size but produce no entry.
pub fn parse_songs(text: &str, placeholder_marker: &str) -> SongColumns {
    let lines: Vec<&str> = text.trim().split('\n').collect();
    let per_column = lines.len().div_ceil(SONG_COLUMNS).max(1);

    let mut columns = SongColumns::default();
    for (idx, line) in lines.iter().enumerate() {
        let column = idx / per_column;
        if column >= SONG_COLUMNS {
            break;
        }
        let entry = SongEntry::parse_line(line, placeholder_marker);
        if entry.title.is_empty() {
            continue;
        }
        columns.columns[column].push(entry);
    }
    columns
}

/// Parse the gallery manifest: trimmed, non-blank lines in order.
pub fn parse_gallery(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the album manifest: the first non-blank line, if any.
pub fn parse_album(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Turn a directory listing (JSON array of filenames) into gallery paths.
pub fn parse_directory_listing(json: &str, directory: &str) -> Result<Vec<String>, ManifestError> {
    let filenames: Vec<String> = serde_json::from_str(json)?;
    let prefix = directory.trim_end_matches('/');
    Ok(filenames
        .into_iter()
        .map(|name| {
            if prefix.is_empty() {
                name
            } else {
                format!("{prefix}/{name}")
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(columns: &SongColumns, column: usize) -> Vec<&str> {
        columns
            .column(column)
            .iter()
            .map(|s| s.title.as_str())
            .collect()
    }

    #[test]
    fn test_parse_line_with_video() {
        let entry = SongEntry::parse_line(
            "Twinkle|https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            DEFAULT_PLACEHOLDER_MARKER,
        );
        assert_eq!(entry.title, "Twinkle");
        assert_eq!(
            entry.video_url.as_deref(),
            Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        assert!(entry.has_video);
    }

    #[test]
    fn test_parse_line_empty_url() {
        let entry = SongEntry::parse_line("Hidden Track|", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(entry.title, "Hidden Track");
        assert_eq!(entry.video_url, None);
        assert!(!entry.has_video);
    }

    #[test]
    fn test_parse_line_without_separator() {
        let entry = SongEntry::parse_line("  Opera of the wasteland  ", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(entry.title, "Opera of the wasteland");
        assert!(!entry.has_video);
    }

    #[test]
    fn test_parse_line_placeholder_url() {
        let entry = SongEntry::parse_line(
            "Soon|https://www.youtube.com/watch?v=example",
            DEFAULT_PLACEHOLDER_MARKER,
        );
        assert!(!entry.has_video);
        assert!(entry.video_url.is_some());
    }

    #[test]
    fn test_parse_line_splits_on_first_pipe() {
        let entry = SongEntry::parse_line("A|b|c", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(entry.title, "A");
        assert_eq!(entry.video_url.as_deref(), Some("b|c"));
    }

    #[test]
    fn test_songs_split_into_three_columns() {
        let text = "a\nb\nc\nd\ne\nf\ng";
        let columns = parse_songs(text, DEFAULT_PLACEHOLDER_MARKER);
        // ceil(7 / 3) = 3 per column
        assert_eq!(titles(&columns, 0), vec!["a", "b", "c"]);
        assert_eq!(titles(&columns, 1), vec!["d", "e", "f"]);
        assert_eq!(titles(&columns, 2), vec!["g"]);
        assert_eq!(columns.len(), 7);
    }

    #[test]
    fn test_last_column_may_be_empty() {
        let columns = parse_songs("a\nb\nc\nd", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(titles(&columns, 0), vec!["a", "b"]);
        assert_eq!(titles(&columns, 1), vec!["c", "d"]);
        assert!(columns.column(2).is_empty());
        assert_eq!(columns.rendered().count(), 2);
    }

    #[test]
    fn test_blank_lines_count_towards_column_size() {
        let columns = parse_songs("a\n\nb\nc\n\nd", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(titles(&columns, 0), vec!["a"]);
        assert_eq!(titles(&columns, 1), vec!["b", "c"]);
        assert_eq!(titles(&columns, 2), vec!["d"]);
    }

    #[test]
    fn test_empty_song_manifest() {
        let columns = parse_songs("   \n  ", DEFAULT_PLACEHOLDER_MARKER);
        assert!(columns.is_empty());
        assert_eq!(columns.rendered().count(), 0);
    }

    #[test]
    fn test_single_song() {
        let columns = parse_songs("Only|", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(titles(&columns, 0), vec!["Only"]);
        assert_eq!(columns.rendered().count(), 1);
    }

    #[test]
    fn test_songs_carry_ids() {
        let columns = parse_songs("a\nb\nc\nd\ne", DEFAULT_PLACEHOLDER_MARKER);
        let ids: Vec<String> = columns.songs().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["0-0", "0-1", "1-0", "1-1", "2-0"]);
        assert_eq!(columns.get(SongId::new(2, 0)).unwrap().title, "e");
        assert!(columns.get(SongId::new(2, 1)).is_none());
    }

    #[test]
    fn test_windows_line_endings() {
        let columns = parse_songs("a|\r\nb|\r\nc|", DEFAULT_PLACEHOLDER_MARKER);
        assert_eq!(titles(&columns, 2), vec!["c"]);
    }

    #[test]
    fn test_parse_gallery() {
        let paths = parse_gallery("\nimg/1.jpg\n  \n img/2.png \nimg/1.jpg\n");
        assert_eq!(paths, vec!["img/1.jpg", "img/2.png", "img/1.jpg"]);
    }

    #[test]
    fn test_parse_album() {
        assert_eq!(
            parse_album("\n  covers/album.jpg \nignored.jpg"),
            Some("covers/album.jpg".to_string())
        );
        assert_eq!(parse_album(" \n "), None);
    }

    #[test]
    fn test_parse_directory_listing() {
        let paths = parse_directory_listing(r#"["a.jpg", "b.png"]"#, "material/photo/").unwrap();
        assert_eq!(paths, vec!["material/photo/a.jpg", "material/photo/b.png"]);
    }

    #[test]
    fn test_parse_directory_listing_empty() {
        let paths = parse_directory_listing("[]", "material/photo").unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_parse_directory_listing_invalid() {
        let err = parse_directory_listing("{\"error\": true}", "photos").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
