//! Plain text renderer — one block per function.
//!
//! ```text
//! Add(a int, b int) int
//! adds a and b together.
//!
//! ```

use crate::model::DocRecord;
use crate::render::Renderer;
use std::io;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, records: &[DocRecord]) -> io::Result<String> {
        let mut out = String::new();
        for rec in records {
            out.push_str(&rec.heading());
            out.push('\n');
            out.push_str(&rec.doc_string);
            out.push_str("\n\n");
        }
        Ok(out)
    }
}
