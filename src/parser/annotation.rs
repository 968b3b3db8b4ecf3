//! Line-level tokenizers for the two fixed grammars.
//!
//! - Annotation line: `[marker] fn <name>: <docstring>`
//! - Emphasis-marked argument name: `*name*`

use crate::model::ParsedAnnotation;

/// Marker that wraps an argument name in a docstring.
const EMPHASIS: char = '*';

/// Strip the comment marker (if any) and surrounding whitespace from a comment.
///
/// `// text` → `text`, `/// text` → `text`, `/* text */` → `text`. Multi-line
/// block comments are folded onto one line, dropping leading ` * ` decoration.
pub fn strip_marker(text: &str) -> String {
    let text = text.trim();

    if let Some(rest) = text
        .strip_prefix("///")
        .or_else(|| text.strip_prefix("//!"))
        .or_else(|| text.strip_prefix("//"))
    {
        return rest.trim().to_string();
    }

    if let Some(body) = text.strip_prefix("/*") {
        let body = body.strip_suffix("*/").unwrap_or(body);
        let body = body
            .strip_prefix('*')
            .or_else(|| body.strip_prefix('!'))
            .unwrap_or(body);
        return body
            .lines()
            .map(|l| {
                let l = l.trim();
                l.strip_prefix('*').map(str::trim_start).unwrap_or(l)
            })
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
    }

    text.to_string()
}

/// Match a `fn Name: docstring` annotation.
///
/// The name is everything between `fn` and the first `:`, trimmed; it must be
/// non-empty. At least one whitespace character must follow `fn`. The
/// docstring may be empty here; deciding what an empty one means is up to
/// the caller.
pub fn match_annotation(text: &str) -> Option<ParsedAnnotation> {
    let body = strip_marker(text);
    let rest = body.strip_prefix("fn")?;

    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let (name, docstring) = rest.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(ParsedAnnotation {
        name: name.to_string(),
        docstring: docstring.trim().to_string(),
    })
}

/// Names wrapped in emphasis markers, in order of appearance.
///
/// `adds *a* and *b*` → `["a", "b"]`. Names label parameters by position, so
/// a repeated name is kept every time it appears.
pub fn extract_arg_names(docstring: &str) -> Vec<String> {
    emphasized_tokens(docstring)
        .into_iter()
        .map(|(_, token)| token.to_string())
        .collect()
}

/// Remove the emphasis markers around marked names, keeping the names.
///
/// `adds *a* and *b*` → `adds a and b`. Stray markers are left alone.
pub fn strip_emphasis(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, token) in emphasized_tokens(text) {
        out.push_str(&text[last..start]);
        out.push_str(token);
        last = start + token.len() + 2 * EMPHASIS.len_utf8();
    }
    out.push_str(&text[last..]);
    out
}

/// Byte offset of the opening marker and the token, for each `*token*`.
///
/// Scanning resumes after the closing marker, so `*a**b*` yields both names
/// and `*a*b*` only `a`.
fn emphasized_tokens(text: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut i = 0;

    while let Some(offset) = text[i..].find(EMPHASIS) {
        let open = i + offset;
        let start = open + EMPHASIS.len_utf8();
        let len: usize = text[start..]
            .chars()
            .take_while(|c| is_word_char(*c))
            .map(char::len_utf8)
            .sum();
        let end = start + len;

        if len > 0 && text[end..].starts_with(EMPHASIS) {
            found.push((open, &text[start..end]));
            i = end + EMPHASIS.len_utf8();
        } else {
            i = start;
        }
    }

    found
}

fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}
