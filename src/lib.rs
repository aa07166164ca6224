//! YouTube playlist page generator
//!
//! This library turns a playlist listing from an external extractor into a
//! static HTML page that browses the playlist in natural title order.

pub mod error;
pub mod export;
pub mod extractor;
pub mod input;
pub mod model;
pub mod parse;
pub mod render;

pub use error::PlaylistError;
pub use export::config::ExportConfig;
pub use export::pipeline::{ExportPipeline, ExportSummary};
