//! Extractor trait and captured process output

use crate::error::PlaylistError;

/// Source of raw playlist listings
pub trait PlaylistExtractor {
    /// Run the extraction for a playlist URL and capture what it printed
    fn run(&self, url: &str) -> Result<ExtractorOutput, PlaylistError>;

    /// Fetch the listing, failing when the extractor reported an error
    fn fetch_lines(&self, url: &str) -> Result<Vec<String>, PlaylistError> {
        self.run(url)?.into_lines()
    }
}

/// Captured result of one extractor run
#[derive(Debug, Clone)]
pub struct ExtractorOutput {
    /// Exit code (None when terminated by a signal)
    pub status: Option<i32>,

    /// Standard output, decoded as text
    pub stdout: String,

    /// Standard error, decoded as text
    pub stderr: String,
}

impl ExtractorOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Split stdout into lines, or surface stderr as a failure
    pub fn into_lines(self) -> Result<Vec<String>, PlaylistError> {
        if !self.success() {
            return Err(PlaylistError::ExtractorFailed {
                status: self.status,
                stderr: self.stderr,
            });
        }

        Ok(self.stdout.lines().map(str::to_string).collect())
    }
}
