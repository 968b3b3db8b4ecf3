//! Per-group state machine turning comment lines into documentation records.
//!
//! A group starts in `Init`. An annotation naming a registered function with
//! a non-empty docstring moves it to `Active`; later plain lines extend the
//! docstring. A plain line while still in `Init`, or a function whose
//! signature cannot be rendered, drops the whole group: later annotations in
//! the same group are never looked at.

use crate::model::{CommentGroup, DocRecord};
use crate::parser::annotation::{extract_arg_names, match_annotation, strip_emphasis, strip_marker};
use crate::registry::Registry;
use crate::signature::{self, Signature};

enum State {
    Init,
    Active(Pending),
}

/// Record under construction.
struct Pending {
    name: String,
    doc_string: String,
    signature: Signature,
    line: usize,
}

impl Pending {
    fn into_record(self) -> DocRecord {
        DocRecord {
            name: self.name,
            doc_string: strip_emphasis(&self.doc_string),
            signature: self.signature.params,
            returns: self.signature.returns,
            return_types: self.signature.return_types,
            line: self.line,
        }
    }
}

/// Correlate every group, keeping completed records in source order.
pub fn correlate_all(groups: &[CommentGroup], registry: &Registry) -> Vec<DocRecord> {
    groups
        .iter()
        .filter_map(|group| correlate(group, registry))
        .collect()
}

/// Run one group through the state machine.
pub fn correlate(group: &CommentGroup, registry: &Registry) -> Option<DocRecord> {
    let mut state = State::Init;

    for comment in &group.lines {
        match match_annotation(&comment.text) {
            Some(ann) => {
                let binding = match registry.get(&ann.name) {
                    Some(b) if !ann.docstring.is_empty() => b,
                    _ => {
                        tracing::debug!(
                            "line {}: ignoring annotation for {:?} (unregistered or empty docstring)",
                            comment.line,
                            ann.name
                        );
                        continue;
                    }
                };

                let arg_names = extract_arg_names(&ann.docstring);
                match signature::synthesize(&ann.name, binding, &arg_names) {
                    Ok(signature) => {
                        state = State::Active(Pending {
                            name: ann.name,
                            doc_string: ann.docstring,
                            signature,
                            line: comment.line,
                        });
                    }
                    Err(e) => {
                        tracing::warn!("line {}: signature failed: {}", comment.line, e);
                        return None;
                    }
                }
            }
            None => match &mut state {
                State::Active(pending) => {
                    // A bare marker still contributes its separator.
                    pending.doc_string.push(' ');
                    pending.doc_string.push_str(&strip_marker(&comment.text));
                }
                State::Init => {
                    tracing::trace!("line {}: comment group is not an annotation", comment.line);
                    return None;
                }
            },
        }
    }

    match state {
        State::Active(pending) => Some(pending.into_record()),
        State::Init => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommentLine;
    use crate::registry::FuncDescriptor;

    fn group(lines: &[&str]) -> CommentGroup {
        CommentGroup {
            lines: lines
                .iter()
                .enumerate()
                .map(|(i, text)| CommentLine {
                    text: text.to_string(),
                    line: i + 1,
                })
                .collect(),
        }
    }

    fn registry() -> Registry {
        let mut r = Registry::new();
        r.register("Add", FuncDescriptor::new().param("int").param("int").returns("int"));
        r.register("Echo", FuncDescriptor::new().param("string").returns("string"));
        r.register_value("Debug", "bool");
        r
    }

    #[test]
    fn single_annotation_completes() {
        let rec = correlate(&group(&["// fn Add: adds *a* and *b* together."]), &registry()).unwrap();
        assert_eq!(rec.name, "Add");
        assert_eq!(rec.doc_string, "adds a and b together.");
        assert_eq!(rec.signature, "a int, b int");
        assert_eq!(rec.returns, "int");
        assert_eq!(rec.line, 1);
    }

    #[test]
    fn continuation_lines_are_appended() {
        let rec = correlate(
            &group(&["// fn Echo: returns *msg* unchanged.", "// Useful for testing."]),
            &registry(),
        )
        .unwrap();
        assert_eq!(rec.doc_string, "returns msg unchanged. Useful for testing.");
        assert_eq!(rec.signature, "msg string");
    }

    #[test]
    fn bare_continuation_keeps_separator() {
        let rec = correlate(&group(&["// fn Echo: echoes.", "//", "// More."]), &registry()).unwrap();
        assert_eq!(rec.doc_string, "echoes.  More.");
    }

    #[test]
    fn repeated_name_labels_each_parameter() {
        let mut r = registry();
        r.register("Pair", FuncDescriptor::new().param("int").param("int").returns("int"));

        let rec = correlate(&group(&["// fn Pair: pairs *x* with *x*."]), &r).unwrap();
        assert_eq!(rec.signature, "x int, x int");
        assert_eq!(rec.doc_string, "pairs x with x.");
    }

    #[test]
    fn unknown_function_yields_nothing() {
        assert!(correlate(&group(&["// fn Multiply: multiplies *a* and *b*."]), &registry()).is_none());
    }

    #[test]
    fn unknown_function_then_prose_never_activates() {
        let g = group(&["// fn Multiply: multiplies.", "// more prose"]);
        assert!(correlate(&g, &registry()).is_none());
    }

    #[test]
    fn ignored_annotation_does_not_disturb_active_record() {
        let g = group(&["// fn Echo: echoes.", "// fn Multiply: ignored", "// tail"]);
        let rec = correlate(&g, &registry()).unwrap();
        assert_eq!(rec.name, "Echo");
        assert_eq!(rec.doc_string, "echoes. tail");
    }

    #[test]
    fn empty_docstring_is_ignored() {
        assert!(correlate(&group(&["// fn Echo:"]), &registry()).is_none());

        let g = group(&["// fn Echo:", "// fn Add: adds."]);
        assert_eq!(correlate(&g, &registry()).unwrap().name, "Add");
    }

    #[test]
    fn leading_prose_abandons_group() {
        let g = group(&["// Some header.", "// fn Add: adds *a* and *b*."]);
        assert!(correlate(&g, &registry()).is_none());
    }

    #[test]
    fn signature_failure_abandons_group() {
        let g = group(&["// fn Echo: echoes.", "// fn Debug: toggles.", "// tail"]);
        assert!(correlate(&g, &registry()).is_none());
    }

    #[test]
    fn later_annotation_replaces_earlier() {
        let g = group(&["// fn Echo: echoes.", "// fn Add: adds *x* and *y*.", "// done"]);
        let rec = correlate(&g, &registry()).unwrap();
        assert_eq!(rec.name, "Add");
        assert_eq!(rec.doc_string, "adds x and y. done");
        assert_eq!(rec.signature, "x int, y int");
        assert_eq!(rec.line, 2);
    }

    #[test]
    fn records_kept_in_source_order() {
        let groups = vec![
            group(&["// fn Echo: echoes."]),
            group(&["// not docs"]),
            group(&["// fn Add: adds."]),
        ];
        let names: Vec<String> = correlate_all(&groups, &registry())
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Echo", "Add"]);
    }
}
