//! Extractor returning fixed output
//!
//! Stands in for the external program when the listing is already known.

use super::traits::{ExtractorOutput, PlaylistExtractor};
use crate::error::PlaylistError;

/// Extractor that replays a captured run
#[derive(Debug, Clone)]
pub struct CannedExtractor {
    output: ExtractorOutput,
}

impl CannedExtractor {
    /// Successful run printing `stdout`
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            output: ExtractorOutput {
                status: Some(0),
                stdout: stdout.into(),
                stderr: String::new(),
            },
        }
    }

    /// Failed run with exit code `code` printing `stderr`
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            output: ExtractorOutput {
                status: Some(code),
                stdout: String::new(),
                stderr: stderr.into(),
            },
        }
    }
}

impl PlaylistExtractor for CannedExtractor {
    fn run(&self, url: &str) -> Result<ExtractorOutput, PlaylistError> {
        log::debug!("Canned extractor answering for {}", url);
        Ok(self.output.clone())
    }
}
