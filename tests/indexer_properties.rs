//! Property-based tests for the indexer, mapper and diff
//!
//! These tests verify invariants that should hold for all inputs:
//! - Mapping is deterministic and title-cases ordinary paths
//! - Index output is ordered by offset
//! - Class association is positional, with "Unknown" before the first class
//! - Indexing has no hidden state
//! - Missing count equals entries minus marked entries

use porttrack::common::title_case;
use porttrack::indexer::{scan_classes, ScanPatterns};
use porttrack::{diff, index, map_module_path, IndexerConfig, MappingRules, ModulePath};
use proptest::prelude::*;
use std::collections::HashSet;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "class Test[A-Za-z0-9]{0,6}:",
        "class Helper[A-Za-z]{0,4}:",
        "    def test_[a-z0-9_]{1,8}\\(self\\):",
        "def test_[a-z]{1,6}\\(\\):",
        "    def helper_[a-z]{1,4}\\(self\\):",
        "        \"\"\"[A-Za-z ]{0,12}\"\"\"",
        "[a-z =]{0,12}",
    ]
}

fn source_text() -> impl Strategy<Value = String> {
    prop::collection::vec(source_line(), 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn prop_mapping_is_deterministic(segments in prop::collection::vec(segment(), 0..6)) {
        let rules = MappingRules::default();
        let path = ModulePath::new(segments);
        prop_assert_eq!(map_module_path(&path, &rules), map_module_path(&path, &rules));
    }

    #[test]
    fn prop_generic_rule_title_cases_every_segment(
        segments in prop::collection::vec(segment(), 1..6)
    ) {
        prop_assume!(segments[0] != "pykotor" && segments[0] != "utility");
        prop_assume!(!(segments.len() > 2 && segments[0] == "resource" && segments[1] == "formats"));

        let expected: Vec<String> = segments.iter().map(|s| title_case(s)).collect();
        let mapped = map_module_path(&ModulePath::new(segments), &MappingRules::default());
        prop_assert_eq!(mapped.segments(), expected.as_slice());
    }

    #[test]
    fn prop_index_offsets_are_non_decreasing(source in source_text()) {
        let entries = index(&source);
        for pair in entries.windows(2) {
            prop_assert!(pair[0].offset <= pair[1].offset);
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }

    #[test]
    fn prop_unknown_class_iff_before_first_class(source in source_text()) {
        let patterns = ScanPatterns::new(&IndexerConfig::default()).unwrap();
        let first_class = scan_classes(&source, &patterns).first().map(|c| c.offset);

        for entry in index(&source) {
            let before_every_class = first_class.map_or(true, |offset| entry.offset < offset);
            prop_assert_eq!(entry.class_name == "Unknown", before_every_class);
        }
    }

    #[test]
    fn prop_index_is_idempotent(source in source_text()) {
        prop_assert_eq!(index(&source), index(&source));
    }

    #[test]
    fn prop_missing_length_matches_marked_entries(
        source in source_text(),
        keep in prop::collection::vec(any::<bool>(), 30),
        extra in prop::collection::vec("test_[a-z]{1,6}", 0..4),
    ) {
        let entries = index(&source);
        let mut ported = String::new();
        for (entry, kept) in entries.iter().zip(keep.iter().cycle()) {
            if *kept {
                ported.push_str(&format!("// Original: def {}(self):\n", entry.name));
            }
        }
        for name in &extra {
            ported.push_str(&format!("    // Original: def {name}(self):\n"));
        }

        let marker_names: HashSet<String> = ported
            .lines()
            .filter_map(|line| line.split("def ").nth(1))
            .filter_map(|rest| rest.split('(').next())
            .map(str::to_string)
            .collect();
        let marked = entries.iter().filter(|e| marker_names.contains(&e.name)).count();

        let result = diff(&entries, &ported);
        prop_assert_eq!(result.total, entries.len());
        prop_assert_eq!(result.ported, marker_names.len());
        prop_assert_eq!(result.missing.len(), entries.len() - marked);
        prop_assert_eq!(result.matched + result.missing.len(), result.total);
    }
}
