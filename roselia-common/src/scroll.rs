//! Scroll-driven header compaction and navigation highlighting.

/// Offset past which the header switches to its compact style
pub const DEFAULT_COMPACT_HEADER_OFFSET: f64 = 50.0;

/// Distance below the scroll offset used to probe for the current section
pub const DEFAULT_SECTION_LOOKAHEAD: f64 = 150.0;

/// Vertical extent of a page section, as laid out in the document
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Header and navigation state derived from one scroll event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollUpdate {
    pub compact_header: bool,
    pub active_section: Option<String>,
}

/// Maps a scroll offset to header and nav state
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    pub compact_header_offset: f64,
    pub lookahead: f64,
    /// Drop the highlight when no section contains the probe
    pub clear_on_gap: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            compact_header_offset: DEFAULT_COMPACT_HEADER_OFFSET,
            lookahead: DEFAULT_SECTION_LOOKAHEAD,
            clear_on_gap: false,
        }
    }
}

impl ScrollTracker {
    /// Compute header and nav state for `offset`.
    ///
    /// When sections overlap the last one in document order wins. When none
    /// contains the probe, `previous` is kept unless `clear_on_gap` is set.
    pub fn update(
        &self,
        offset: f64,
        sections: &[SectionBounds],
        previous: Option<&str>,
    ) -> ScrollUpdate {
        let probe = offset + self.lookahead;
        let matched = sections.iter().rev().find(|s| s.contains(probe));

        let active_section = match matched {
            Some(section) => Some(section.id.clone()),
            None if self.clear_on_gap => None,
            None => previous.map(str::to_string),
        };

        ScrollUpdate {
            compact_header: offset > self.compact_header_offset,
            active_section,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("songs", 600.0, 900.0),
            SectionBounds::new("gallery", 1600.0, 500.0),
        ]
    }

    #[test]
    fn test_header_threshold() {
        let tracker = ScrollTracker::default();
        assert!(!tracker.update(0.0, &[], None).compact_header);
        assert!(!tracker.update(50.0, &[], None).compact_header);
        assert!(tracker.update(50.5, &[], None).compact_header);
    }

    #[test]
    fn test_probe_uses_lookahead() {
        let tracker = ScrollTracker::default();
        // 450 + 150 = 600 lands on the first pixel of "songs"
        let update = tracker.update(450.0, &sections(), Some("home"));
        assert_eq!(update.active_section.as_deref(), Some("songs"));

        let update = tracker.update(449.0, &sections(), None);
        assert_eq!(update.active_section.as_deref(), Some("home"));
    }

    #[test]
    fn test_gap_keeps_previous() {
        let tracker = ScrollTracker::default();
        // 1400 + 150 = 1550 falls between "songs" and "gallery"
        let update = tracker.update(1400.0, &sections(), Some("songs"));
        assert_eq!(update.active_section.as_deref(), Some("songs"));
    }

    #[test]
    fn test_gap_clears_when_configured() {
        let tracker = ScrollTracker {
            clear_on_gap: true,
            ..Default::default()
        };
        let update = tracker.update(1400.0, &sections(), Some("songs"));
        assert_eq!(update.active_section, None);
    }

    #[test]
    fn test_nested_sections_last_wins() {
        let tracker = ScrollTracker::default();
        let nested = vec![
            SectionBounds::new("outer", 0.0, 2000.0),
            SectionBounds::new("inner", 500.0, 200.0),
        ];
        let update = tracker.update(400.0, &nested, None);
        assert_eq!(update.active_section.as_deref(), Some("inner"));
    }
}
