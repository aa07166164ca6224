//! yt-dlp backed extractor

use super::traits::{ExtractorOutput, PlaylistExtractor};
use crate::error::PlaylistError;
use std::path::PathBuf;
use std::process::Command;

/// Print template: one `title|id` line per entry
pub const PRINT_FORMAT: &str = "%(title)s|%(id)s";

/// Runs yt-dlp (or a compatible program) in flat-playlist mode
pub struct YtDlpExtractor {
    program: PathBuf,
}

impl YtDlpExtractor {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("yt-dlp"),
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Arguments passed to the extractor for a URL
    pub fn args(url: &str) -> [&str; 4] {
        ["--flat-playlist", "--print", PRINT_FORMAT, url]
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaylistExtractor for YtDlpExtractor {
    fn run(&self, url: &str) -> Result<ExtractorOutput, PlaylistError> {
        log::debug!("Running {:?} {:?}", self.program, Self::args(url));

        let output = Command::new(&self.program)
            .args(Self::args(url))
            .output()
            .map_err(|source| PlaylistError::ExtractorLaunch {
                program: self.program.display().to_string(),
                source,
            })?;

        log::debug!(
            "Extractor exited with {:?} ({} bytes stdout, {} bytes stderr)",
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(ExtractorOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
