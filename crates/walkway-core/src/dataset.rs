//! Reader for `.dot` walkway datasets
//!
//! A dataset lists undirected walkways as directed-looking edge statements:
//!
//! ```text
//! digraph campus {
//!     "Union South" -> "Computer Sciences and Statistics" [seconds=176.4];
//!     "Computer Sciences and Statistics" -> Library [seconds=80];
//! }
//! ```
//!
//! Only lines containing `->` are edge statements; every other line
//! (graph header, closing brace, blank lines, `//` or `#` comments) is
//! skipped. Names may be quoted or bare words.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;

use crate::error::{Result, WalkwayError};
use crate::graph::types::{Cost, NodeId};

/// File extension every dataset must carry
pub const DATASET_EXTENSION: &str = "dot";

const EDGE_PATTERN: &str = r#"^\s*(?:"(?P<from_q>[^"]*)"|(?P<from>[\w.]+))\s*->\s*(?:"(?P<to_q>[^"]*)"|(?P<to>[\w.]+))\s*\[\s*seconds\s*=\s*(?P<weight>[^\]]*?)\s*\]\s*;?\s*$"#;

static EDGE_LINE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

fn edge_line_pattern() -> Result<&'static Regex> {
    EDGE_LINE
        .get_or_init(|| Regex::new(EDGE_PATTERN))
        .as_ref()
        .map_err(|e| WalkwayError::Other(format!("failed to compile edge pattern: {}", e)))
}

/// One walkway read from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
}

/// Read and parse a dataset file.
///
/// Fails with `InvalidDataset` when the path does not end in `.dot` or a
/// line cannot be parsed, and with `DatasetNotFound` when the file is missing.
pub fn read_dataset(path: &Path) -> Result<Vec<EdgeRecord>> {
    let has_dot_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DATASET_EXTENSION));
    if !has_dot_extension {
        return Err(WalkwayError::invalid_dataset(
            path,
            None,
            "expected a .dot file",
        ));
    }
    if !path.is_file() {
        return Err(WalkwayError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let start = Instant::now();
    let content = fs::read_to_string(path)?;
    let records = parse_dataset(&content, path)?;
    crate::trace_time!(start, "read_dataset", edges = records.len());
    Ok(records)
}

/// Parse dataset text. `origin` is only used in error messages.
pub fn parse_dataset(content: &str, origin: impl Into<PathBuf>) -> Result<Vec<EdgeRecord>> {
    let origin = origin.into();
    let pattern = edge_line_pattern()?;
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('#') || !trimmed.contains("->") {
            continue;
        }

        let caps = pattern.captures(trimmed).ok_or_else(|| {
            WalkwayError::invalid_dataset(
                &origin,
                Some(line_no),
                format!("malformed edge statement: {}", trimmed),
            )
        })?;

        let from = caps
            .name("from_q")
            .or_else(|| caps.name("from"))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let to = caps
            .name("to_q")
            .or_else(|| caps.name("to"))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let raw_weight = caps.name("weight").map(|m| m.as_str()).unwrap_or_default();
        let weight: f64 = raw_weight.parse().map_err(|_| {
            WalkwayError::invalid_dataset(
                &origin,
                Some(line_no),
                format!("invalid weight: {:?}", raw_weight),
            )
        })?;
        if !Cost::is_valid_weight(weight) {
            return Err(WalkwayError::invalid_dataset(
                &origin,
                Some(line_no),
                format!("weight must be finite and non-negative: {}", raw_weight),
            ));
        }

        records.push(EdgeRecord { from, to, weight });
    }

    tracing::debug!(origin = %origin.display(), edges = records.len(), "parse_dataset");
    Ok(records)
}
