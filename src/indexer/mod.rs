//! Structural test indexing over plain source text.
//!
//! No syntax tree is built. Class declarations and test function declarations
//! are collected by two independent scans, both ordered by offset, and each
//! function is attached to the last class that starts at or before it using a
//! cursor that only moves forward. Nested or re-opened classes are therefore
//! approximated by position, which is sufficient for flat test files.

pub mod patterns;

pub use patterns::{IndexerConfig, ScanPatterns};

use crate::common::LineIndex;
use crate::core::{ClassMarker, TestEntry, UNKNOWN_CLASS};
use patterns::DEFAULT_PATTERNS;
use std::collections::HashMap;

/// A function declaration before class association.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FunctionMatch {
    offset: usize,
    end: usize,
    name: String,
    params: String,
}

/// Index `source` with the default `Test` / `test_` prefixes.
pub fn index(source: &str) -> Vec<TestEntry> {
    index_with(source, &DEFAULT_PATTERNS)
}

/// Index `source` with caller-supplied patterns.
pub fn index_with(source: &str, patterns: &ScanPatterns) -> Vec<TestEntry> {
    let classes = scan_classes(source, patterns);
    let functions = scan_functions(source, patterns);
    let lines = LineIndex::new(source);

    let mut next_class = 0;
    let entries: Vec<TestEntry> = functions
        .into_iter()
        .map(|function| {
            while next_class < classes.len() && classes[next_class].offset <= function.offset {
                next_class += 1;
            }
            let class_name = match next_class {
                0 => UNKNOWN_CLASS.to_string(),
                n => classes[n - 1].name.clone(),
            };
            let doc = leading_doc_line(source, function.end, patterns);

            TestEntry {
                class_name,
                line: lines.line_of(function.offset),
                name: function.name,
                params: function.params,
                doc,
                offset: function.offset,
            }
        })
        .collect();

    tracing::debug!(
        classes = classes.len(),
        tests = entries.len(),
        "indexed test source"
    );
    entries
}

/// All class declarations in `source`, in order of appearance.
pub fn scan_classes(source: &str, patterns: &ScanPatterns) -> Vec<ClassMarker> {
    patterns
        .class_decl
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(ClassMarker {
                offset: whole.start(),
                name: caps.get(1)?.as_str().to_string(),
            })
        })
        .collect()
}

fn scan_functions(source: &str, patterns: &ScanPatterns) -> Vec<FunctionMatch> {
    patterns
        .function_decl
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(FunctionMatch {
                offset: whole.start(),
                end: whole.end(),
                name: caps.get(1)?.as_str().to_string(),
                params: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
            })
        })
        .collect()
}

/// First line of the docstring that directly follows a declaration ending at
/// `decl_end`, trimmed. Empty when there is none.
fn leading_doc_line(source: &str, decl_end: usize, patterns: &ScanPatterns) -> String {
    let Some(rest) = source.get(decl_end..) else {
        return String::new();
    };
    patterns
        .doc_block
        .captures(rest)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|body| body.as_str().trim().lines().next())
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

/// Indexed tests of one file with grouping helpers for reports.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestIndex {
    pub entries: Vec<TestEntry>,
}

impl TestIndex {
    pub fn build(source: &str, patterns: &ScanPatterns) -> Self {
        Self {
            entries: index_with(source, patterns),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by class, groups in order of first appearance.
    pub fn by_class(&self) -> Vec<(&str, Vec<&TestEntry>)> {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&TestEntry>)> = Vec::new();
        for entry in &self.entries {
            let slot = *positions.entry(entry.class_name.as_str()).or_insert_with(|| {
                groups.push((entry.class_name.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(entry);
        }
        groups
    }

    /// Function names declared more than once, in order of first repeat.
    ///
    /// These collapse into a single logical test when diffing against ported
    /// markers, since membership is decided by name only.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let count = counts.entry(entry.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(entry.name.as_str());
            }
        }
        duplicates
    }
}
