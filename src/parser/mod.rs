//! Parser module — scan a source file and correlate its annotations.

pub mod annotation;
pub mod correlate;
pub mod scan;

use crate::error::{ParseError, SyntaxError};
use crate::model::{CommentGroup, DocRecord};
use crate::registry::Registry;
use std::fs;
use std::path::Path;

/// Read and scan a source file into comment groups.
pub fn scan_file(path: &Path) -> Result<Vec<CommentGroup>, ParseError> {
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    scan::scan(&content).map_err(|e| ParseError::malformed(path, e))
}

/// Extract documentation records from a source file, in source order.
pub fn extract(path: &Path, registry: &Registry) -> Result<Vec<DocRecord>, ParseError> {
    let groups = scan_file(path)?;
    tracing::debug!("{}: {} comment groups", path.display(), groups.len());
    let records = correlate::correlate_all(&groups, registry);
    tracing::info!("{}: {} documented functions", path.display(), records.len());
    Ok(records)
}

/// Extract documentation records from already-loaded source text.
pub fn extract_str(input: &str, registry: &Registry) -> Result<Vec<DocRecord>, SyntaxError> {
    let groups = scan::scan(input)?;
    Ok(correlate::correlate_all(&groups, registry))
}
