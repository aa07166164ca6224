//! Export orchestration

pub mod config;
pub mod pipeline;

pub use config::{ExportConfig, DEFAULT_PAGE_TITLE};
pub use pipeline::{ExportPipeline, ExportSummary};
