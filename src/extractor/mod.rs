//! Playlist extraction layer
//!
//! The extractor is an external program that prints one `title|id` line per
//! playlist member. It sits behind the `PlaylistExtractor` trait so the
//! pipeline can run against canned output in tests.

mod canned;
mod traits;
mod ytdlp;

pub use canned::CannedExtractor;
pub use traits::{ExtractorOutput, PlaylistExtractor};
pub use ytdlp::{YtDlpExtractor, PRINT_FORMAT};
