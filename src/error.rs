//! Fatal error conditions of a run

use std::io;
use thiserror::Error;

/// Errors that end a run with a failure status
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// The extractor executable could not be started
    #[error("Failed to run {program}: {source}")]
    ExtractorLaunch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The extractor ran and reported failure; shown as its own stderr
    #[error("{stderr}")]
    ExtractorFailed { status: Option<i32>, stderr: String },

    /// Nothing survived filtering
    #[error("No valid videos found.")]
    NoValidEntries,
}
