//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;

/// A single comment as it appears in the source, marker included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLine {
    /// Raw text, e.g. `// fn Add: adds *a* and *b*` or `/* ... */`
    pub text: String,
    /// 1-based line where the comment starts
    pub line: usize,
}

/// Contiguous run of comments with no code and no blank line between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub lines: Vec<CommentLine>,
}

/// Result of matching one `fn Name: docstring` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAnnotation {
    pub name: String,
    pub docstring: String,
}

/// A single documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocRecord {
    pub name: String,
    #[serde(rename = "docstring")]
    pub doc_string: String,
    /// Rendered parameter list, e.g. `a int, b int`
    pub signature: String,
    /// Rendered return list, e.g. `string, error`
    pub returns: String,
    /// Return type names, in order
    #[serde(skip)]
    pub return_types: Vec<String>,
    /// Line of the annotation that produced this record
    pub line: usize,
}

impl DocRecord {
    /// Return signature as it follows the parameter list: empty, ` T`, or ` (T1, T2)`.
    pub fn return_suffix(&self) -> String {
        match self.return_types.len() {
            0 => String::new(),
            1 => format!(" {}", self.returns),
            _ => format!(" ({})", self.returns),
        }
    }

    /// `Name(params) Returns` heading line.
    pub fn heading(&self) -> String {
        format!("{}({}){}", self.name, self.signature, self.return_suffix())
    }
}
