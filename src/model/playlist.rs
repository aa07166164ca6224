use super::PlaylistEntry;
use crate::parse::natural_key;

/// Ordered, filtered playlist contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistMetadata {
    entries: Vec<PlaylistEntry>,
}

impl PlaylistMetadata {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping arrival order
    pub fn push(&mut self, entry: PlaylistEntry) {
        self.entries.push(entry);
    }

    /// Stable sort by the natural ordering of titles
    pub fn sort_natural(&mut self) {
        self.entries.sort_by_cached_key(|e| natural_key(&e.title));
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlaylistEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entry survived filtering
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<PlaylistEntry> for PlaylistMetadata {
    fn from_iter<I: IntoIterator<Item = PlaylistEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Everything the page generator needs
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Page title, embedded verbatim
    pub page_title: String,

    /// Sorted entries
    pub entries: PlaylistMetadata,
}

impl RenderContext {
    pub fn new(page_title: impl Into<String>, entries: PlaylistMetadata) -> Self {
        Self {
            page_title: page_title.into(),
            entries,
        }
    }
}
