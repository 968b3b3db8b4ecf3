//! JSON renderer — structured output for tooling integration.

use crate::model::DocRecord;
use crate::render::Renderer;
use serde::Serialize;
use std::io;

pub struct JsonRenderer;

#[derive(Serialize)]
struct Output<'a> {
    functions: &'a [DocRecord],
}

impl Renderer for JsonRenderer {
    fn render(&self, records: &[DocRecord]) -> io::Result<String> {
        let mut out = serde_json::to_string_pretty(&Output { functions: records })?;
        out.push('\n');
        Ok(out)
    }
}
