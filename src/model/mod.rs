//! Playlist data model
//!
//! These structures sit between the extractor output and the generated
//! page. They are built once per run and consumed by the renderer.

mod entry;
mod playlist;

pub use entry::{PlaylistEntry, VIDEO_ID_LEN};
pub use playlist::{PlaylistMetadata, RenderContext};
