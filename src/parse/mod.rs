//! Extractor output parsing
//!
//! Turns the `title|id` lines printed by the extractor into playlist
//! entries. Lines that are not data, private videos and malformed ids are
//! dropped silently; they are routine in real playlists.

mod natural;

pub use natural::{natural_key, NaturalKey, Token};

use crate::model::{PlaylistEntry, PlaylistMetadata};

/// Field delimiter in the extractor print format
pub const DELIMITER: char = '|';

/// Marker the extractor uses for entries we cannot watch
pub const PRIVATE_MARKER: &str = "[Private video]";

/// Why a line was not turned into an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No delimiter on the line
    NotData,
    /// Private video placeholder
    Private,
    /// Identifier field is not a valid video id
    BadId,
}

/// Make a title safe to embed inside a double-quoted script string
pub fn sanitize_title(title: &str) -> String {
    title.replace('"', "'").trim().to_string()
}

/// Split a line on its last delimiter into a sanitized title and trimmed id.
///
/// Returns `None` when the line has no delimiter.
pub fn extract_entry(line: &str) -> Option<(String, String)> {
    let (title, id) = line.rsplit_once(DELIMITER)?;
    Some((sanitize_title(title), id.trim().to_string()))
}

/// Apply the admission rules to one line
pub fn parse_line(line: &str) -> Result<PlaylistEntry, Rejection> {
    if !line.contains(DELIMITER) {
        return Err(Rejection::NotData);
    }
    if line.contains(PRIVATE_MARKER) {
        return Err(Rejection::Private);
    }

    let (title, id) = extract_entry(line).ok_or(Rejection::NotData)?;
    PlaylistEntry::new(title, id).ok_or(Rejection::BadId)
}

/// Parse all lines, keeping accepted entries in arrival order
pub fn parse_entries<'a, I>(lines: I) -> PlaylistMetadata
where
    I: IntoIterator<Item = &'a str>,
{
    let mut playlist = PlaylistMetadata::new();

    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(line) {
            Ok(entry) => playlist.push(entry),
            Err(reason) => log::debug!("Skipping line {}: {:?} ({:?})", idx + 1, reason, line),
        }
    }

    log::info!("Accepted {} playlist entries", playlist.len());
    playlist
}
