//! Output filename derivation

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid non-word pattern"));

/// Extension of generated pages
pub const PAGE_EXTENSION: &str = ".html";

/// Derive a filesystem-safe page filename from a title.
///
/// Runs of non-word characters collapse to one underscore and surrounding
/// underscores are stripped.
pub fn page_filename(title: &str) -> String {
    let stem = NON_WORD_RE.replace_all(title.trim(), "_");
    format!("{}{}", stem.trim_matches('_'), PAGE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_non_word_runs() {
        assert_eq!(page_filename("My Playlist!! 2024"), "My_Playlist_2024.html");
    }

    #[test]
    fn test_default_title() {
        assert_eq!(page_filename("YouTube Playlist"), "YouTube_Playlist.html");
    }

    #[test]
    fn test_strips_surrounding_underscores() {
        assert_eq!(page_filename("  __Course: Part 1__ "), "Course_Part_1.html");
        assert_eq!(page_filename("../etc/passwd"), "etc_passwd.html");
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(page_filename("Café Lectures"), "Café_Lectures.html");
    }

    #[test]
    fn test_no_word_characters_leaves_bare_extension() {
        assert_eq!(page_filename("!!!"), ".html");
        assert_eq!(page_filename("___"), ".html");
    }
}
