//! Main export pipeline orchestration

use super::config::ExportConfig;
use crate::error::PlaylistError;
use crate::extractor::PlaylistExtractor;
use crate::model::{PlaylistMetadata, RenderContext};
use crate::parse::parse_entries;
use crate::render::render_page;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// What a finished export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Path of the written page
    pub path: PathBuf,

    /// Number of entries on the page
    pub entry_count: usize,
}

/// Fetch, filter, sort and render a playlist page
pub struct ExportPipeline<E: PlaylistExtractor> {
    config: ExportConfig,
    extractor: E,
}

impl<E: PlaylistExtractor> ExportPipeline<E> {
    /// Create a new export pipeline
    pub fn new(config: ExportConfig, extractor: E) -> Self {
        Self { config, extractor }
    }

    /// Run the complete export for a playlist URL and raw page title
    pub fn export(&self, url: &str, raw_title: &str) -> Result<ExportSummary> {
        let page_title = self.config.resolve_title(raw_title);

        let entries = self.fetch_entries(url)?;
        let ctx = RenderContext::new(page_title, entries);

        self.write_page(&ctx)
    }

    /// Fetch the listing and turn it into sorted entries
    pub fn fetch_entries(&self, url: &str) -> Result<PlaylistMetadata, PlaylistError> {
        log::info!("Fetching playlist {}", url);
        let lines = self.extractor.fetch_lines(url)?;
        log::info!("Extractor returned {} lines", lines.len());

        let mut entries = parse_entries(lines.iter().map(String::as_str));
        if entries.is_empty() {
            return Err(PlaylistError::NoValidEntries);
        }

        entries.sort_natural();
        Ok(entries)
    }

    /// Render the page and write it, replacing any existing file
    pub fn write_page(&self, ctx: &RenderContext) -> Result<ExportSummary> {
        let path = self.config.output_path(&ctx.page_title);
        let html = render_page(ctx);

        if path.exists() {
            log::info!("Overwriting existing page {:?}", path);
        }

        fs::write(&path, html).with_context(|| format!("Failed to write page: {:?}", path))?;
        log::info!("Page written to {:?}", path);

        Ok(ExportSummary {
            path,
            entry_count: ctx.entries.len(),
        })
    }
}
