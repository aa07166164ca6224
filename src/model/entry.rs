/// Length of a platform video identifier
pub const VIDEO_ID_LEN: usize = 11;

/// A single accepted playlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// Display title (no double quotes, trimmed)
    pub title: String,

    /// Video identifier, always `VIDEO_ID_LEN` characters
    pub video_id: String,
}

impl PlaylistEntry {
    /// Build an entry from an already sanitized title and a trimmed id.
    ///
    /// Returns `None` when the id does not have the fixed identifier length.
    pub fn new(title: String, video_id: String) -> Option<Self> {
        if video_id.chars().count() != VIDEO_ID_LEN {
            return None;
        }
        Some(Self { title, video_id })
    }
}
