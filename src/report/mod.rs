//! Human-readable reports for the three porttrack commands.
//!
//! Renderers are pure: they take already computed results and return the
//! text to print. Only section headers are coloured; `--plain` turns colour
//! off globally through `colored::control`.

use crate::core::{DiffResult, ModulePath, TestEntry};
use crate::io::SourceFile;
use crate::mapping::MappingRules;
use colored::Colorize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// One origin module and where it lands in the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRow {
    pub module: ModulePath,
    pub namespace: String,
    pub has_target_files: bool,
}

/// Origin modules sharing a top-level segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGroup {
    pub top_level: String,
    pub rows: Vec<ModuleRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleReport {
    pub origin_count: usize,
    pub target_count: usize,
    /// Groups sorted by top-level segment, rows sorted by dotted module path
    pub groups: Vec<ModuleGroup>,
    pub namespace_count: usize,
    pub covered_namespace_count: usize,
}

impl ModuleReport {
    pub fn build(origin: &[SourceFile], target: &[SourceFile], rules: &MappingRules) -> Self {
        let target_paths: BTreeSet<String> = target
            .iter()
            .map(|file| file.module_path.segments().join(&rules.separator))
            .collect();

        let mut by_top: BTreeMap<String, Vec<ModuleRow>> = BTreeMap::new();
        let mut namespaces: BTreeMap<String, bool> = BTreeMap::new();

        for file in origin {
            let Some(top_level) = file.module_path.first() else {
                continue;
            };
            let namespace = rules.render(&file.module_path);
            let has_target_files = *namespaces
                .entry(namespace.clone())
                .or_insert_with(|| has_target_files(&target_paths, &namespace, &rules.separator));

            by_top.entry(top_level.to_string()).or_default().push(ModuleRow {
                module: file.module_path.clone(),
                namespace,
                has_target_files,
            });
        }

        let groups = by_top
            .into_iter()
            .map(|(top_level, mut rows)| {
                rows.sort_by_key(|row| row.module.dotted());
                ModuleGroup { top_level, rows }
            })
            .collect();

        Self {
            origin_count: origin.len(),
            target_count: target.len(),
            groups,
            namespace_count: namespaces.len(),
            covered_namespace_count: namespaces.values().filter(|covered| **covered).count(),
        }
    }
}

/// True when a target path equals `namespace` or lies beneath it.
fn has_target_files(target_paths: &BTreeSet<String>, namespace: &str, separator: &str) -> bool {
    if target_paths.contains(namespace) {
        return true;
    }
    let prefix = format!("{namespace}{separator}");
    target_paths
        .range(prefix.clone()..)
        .next()
        .is_some_and(|path| path.starts_with(&prefix))
}

pub fn render_module_report(report: &ModuleReport, group_limit: usize) -> String {
    let mut out = String::new();
    writeln!(out, "Found {} origin modules", report.origin_count).unwrap();
    writeln!(out, "Found {} target files", report.target_count).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", "=== Module Analysis ===".bold()).unwrap();

    for group in &report.groups {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{}",
            format!("{} ({} modules):", group.top_level, group.rows.len()).cyan()
        )
        .unwrap();
        for row in group.rows.iter().take(group_limit) {
            writeln!(out, "  - {} -> {}", row.module, row.namespace).unwrap();
        }
        if group.rows.len() > group_limit {
            writeln!(out, "  ... and {} more", group.rows.len() - group_limit).unwrap();
        }
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "Namespaces with target files: {}/{}",
        report.covered_namespace_count, report.namespace_count
    )
    .unwrap();
    out
}

pub fn render_test_index(entries: &[TestEntry]) -> String {
    let mut out = String::new();
    writeln!(out, "Total tests: {}", entries.len()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", "Test list:".bold()).unwrap();
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{:3}. {}", i + 1, entry.qualified_name()).unwrap();
    }
    out
}

pub fn render_diff(result: &DiffResult) -> String {
    let mut out = String::new();
    writeln!(out, "Total origin tests: {}", result.total).unwrap();
    writeln!(out, "Ported: {}", result.ported).unwrap();
    writeln!(out, "Missing: {}", result.missing.len()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", "Missing test names:".bold()).unwrap();
    for missing in &result.missing {
        writeln!(out, "{}", missing.name).unwrap();
        if !missing.doc.is_empty() {
            writeln!(out, "    {}", missing.doc).unwrap();
        }
    }

    if !result.stale_markers.is_empty() {
        writeln!(out).unwrap();
        writeln!(
            out,
            "{}",
            "Stale markers (no matching origin test):".yellow()
        )
        .unwrap();
        for name in &result.stale_markers {
            writeln!(out, "{name}").unwrap();
        }
    }
    out
}
