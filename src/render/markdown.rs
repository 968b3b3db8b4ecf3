//! GitHub-flavored markdown renderer.
//!
//! An index of function names followed by one section per function, headed
//! by the name and carrying the rendered signature in a code span.

use crate::model::DocRecord;
use crate::render::Renderer;
use crate::toc;
use std::io;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, records: &[DocRecord]) -> io::Result<String> {
        let mut output = String::new();

        if records.is_empty() {
            return Ok(output);
        }

        output.push_str("## Index\n\n");
        for rec in records {
            output.push_str(&toc::render_toc_item(&rec.name));
            output.push('\n');
        }
        output.push('\n');

        for rec in records {
            output.push_str(&render_function(rec));
            output.push('\n');
        }

        Ok(output)
    }
}

fn render_function(rec: &DocRecord) -> String {
    let lines = [
        format!("### {}\n", rec.name),
        format!("`{}`\n", rec.heading()),
        escape(&rec.doc_string),
        String::new(),
    ];
    lines.join("\n")
}

/// Escape characters that would otherwise start markdown emphasis or HTML.
fn escape(text: &str) -> String {
    text.replace('*', "\\*")
        .replace('_', "\\_")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, doc: &str) -> DocRecord {
        DocRecord {
            name: name.to_string(),
            doc_string: doc.to_string(),
            signature: "a int, b int".to_string(),
            returns: "int".to_string(),
            return_types: vec!["int".to_string()],
            line: 1,
        }
    }

    #[test]
    fn renders_index_and_sections() {
        let out = MarkdownRenderer
            .render(&[record("Add", "adds a and b."), record("Sub", "subtracts.")])
            .unwrap();
        assert_eq!(
            out,
            "## Index\n\n* [Add](#add)\n* [Sub](#sub)\n\n\
             ### Add\n\n`Add(a int, b int) int`\n\nadds a and b.\n\n\
             ### Sub\n\n`Sub(a int, b int) int`\n\nsubtracts.\n\n"
        );
    }

    #[test]
    fn escapes_markdown_in_docstring() {
        let out = MarkdownRenderer.render(&[record("Mul", "a * b for <n>")]).unwrap();
        assert!(out.contains("a \\* b for \\<n\\>"), "got: {out}");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(MarkdownRenderer.render(&[]).unwrap(), "");
    }
}
