//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod text;

use crate::model::DocRecord;
use anyhow::{anyhow, Result};
use std::io::{self, Write};

/// Trait for rendering documentation records into a specific output format.
pub trait Renderer {
    fn render(&self, records: &[DocRecord]) -> io::Result<String>;

    /// Render straight into a sink.
    fn render_to(&self, records: &[DocRecord], out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.render(records)?.as_bytes())
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use text, markdown, or json",
            format
        )),
    }
}
