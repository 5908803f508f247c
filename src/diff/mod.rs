//! Ported-test diffing.
//!
//! Target sources record where a ported test came from with a single-line
//! provenance comment:
//!
//! ```text
//! // Original: def test_place_room(self, builder):
//! ```
//!
//! The literal `// Original: def <name>(` is the only contract between the two
//! codebases. Every marker found contributes its name to a set; origin tests
//! whose name is not in the set are reported as missing, in source order.

use crate::core::{DiffResult, MissingTest, Result, TestEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

/// Compiled provenance-marker pattern.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Pattern accepting marker names that start with `function_prefix`.
    pub fn new(function_prefix: &str) -> Result<Self> {
        let prefix = regex::escape(function_prefix);
        Ok(Self {
            regex: Regex::new(&format!(r"// Original: def ({prefix}\w+)\("))?,
        })
    }
}

static DEFAULT_MARKER: Lazy<MarkerPattern> =
    Lazy::new(|| MarkerPattern::new("test_").expect("default marker pattern compiles"));

/// Function names carrying a provenance marker in some target text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortedMarkerSet {
    names: HashSet<String>,
}

impl PortedMarkerSet {
    /// Scan with the default `test_` marker pattern.
    pub fn scan(ported_source: &str) -> Self {
        Self::scan_with(ported_source, &DEFAULT_MARKER)
    }

    pub fn scan_with(ported_source: &str, pattern: &MarkerPattern) -> Self {
        let names = pattern
            .regex
            .captures_iter(ported_source)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PortedMarkerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compare `entries` against the markers found in `ported_source`.
pub fn diff(entries: &[TestEntry], ported_source: &str) -> DiffResult {
    diff_against(entries, &PortedMarkerSet::scan(ported_source))
}

/// Compare `entries` against an already scanned marker set.
///
/// `ported` is the size of the marker set, which can exceed `matched` when
/// markers name tests that no longer exist in the origin. Those names are
/// listed in `stale_markers`.
pub fn diff_against(entries: &[TestEntry], markers: &PortedMarkerSet) -> DiffResult {
    let missing: Vec<MissingTest> = entries
        .iter()
        .filter(|entry| !markers.contains(&entry.name))
        .map(|entry| MissingTest {
            class_name: entry.class_name.clone(),
            name: entry.name.clone(),
            doc: entry.doc.clone(),
        })
        .collect();

    let known: HashSet<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    let stale_markers: Vec<String> = markers
        .iter()
        .filter(|name| !known.contains(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let result = DiffResult {
        total: entries.len(),
        ported: markers.len(),
        matched: entries.len() - missing.len(),
        missing,
        stale_markers,
    };

    tracing::debug!(
        total = result.total,
        ported = result.ported,
        missing = result.missing.len(),
        stale = result.stale_markers.len(),
        "diffed origin tests against ported markers"
    );
    result
}
