//! Page generation
//!
//! Renders a `RenderContext` into the fixed HTML template and derives the
//! filename the page is written to.

mod filename;
mod template;

pub use filename::{page_filename, PAGE_EXTENSION};
pub use template::{fill, ENTRIES_SLOT, PAGE_TEMPLATE, TITLE_SLOT};

use crate::model::{PlaylistEntry, PlaylistMetadata, RenderContext};

/// Serialize one entry as a script object literal
pub fn entry_literal(entry: &PlaylistEntry) -> String {
    format!("  {{ title: \"{}\", id: \"{}\" }}", entry.title, entry.video_id)
}

/// Serialize the entries as the body of a script array, one record per line
pub fn entries_literal(entries: &PlaylistMetadata) -> String {
    entries
        .iter()
        .map(entry_literal)
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Render the complete page.
///
/// The page title is inserted without HTML escaping.
pub fn render_page(ctx: &RenderContext) -> String {
    fill(PAGE_TEMPLATE, &ctx.page_title, &entries_literal(&ctx.entries))
}
