//! Export configuration

use crate::render::page_filename;
use std::path::PathBuf;

/// Title used when none is given
pub const DEFAULT_PAGE_TITLE: &str = "YouTube Playlist";

/// Configuration for page export
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory receiving the page (None = current directory, bare filename)
    pub output_dir: Option<PathBuf>,

    /// Title used when the given one is empty
    pub default_title: String,
}

impl ExportConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            output_dir: None,
            default_title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }

    /// Write pages into `dir`
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Trimmed title, or the default when nothing is left
    pub fn resolve_title(&self, raw: &str) -> String {
        let title = raw.trim();
        if title.is_empty() {
            self.default_title.clone()
        } else {
            title.to_string()
        }
    }

    /// Where the page for `page_title` is written
    pub fn output_path(&self, page_title: &str) -> PathBuf {
        let filename = page_filename(page_title);
        match &self.output_dir {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new()
    }
}
