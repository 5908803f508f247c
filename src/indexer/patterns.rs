use crate::core::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Name prefixes that identify test classes and test functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    #[serde(default = "default_class_prefix")]
    pub class_prefix: String,

    #[serde(default = "default_function_prefix")]
    pub function_prefix: String,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            class_prefix: default_class_prefix(),
            function_prefix: default_function_prefix(),
        }
    }
}

fn default_class_prefix() -> String {
    "Test".to_string()
}

fn default_function_prefix() -> String {
    "test_".to_string()
}

/// Compiled lexical patterns for one prefix configuration.
#[derive(Debug, Clone)]
pub struct ScanPatterns {
    /// `class TestFoo:` at column 0; a base list is not accepted
    pub(crate) class_decl: Regex,
    /// `def test_x(params):` at any indentation, optional `async` and return annotation
    pub(crate) function_decl: Regex,
    /// Docstring opening right after a declaration, anchored at the match end
    pub(crate) doc_block: Regex,
}

impl ScanPatterns {
    pub fn new(config: &IndexerConfig) -> Result<Self> {
        let class_prefix = regex::escape(&config.class_prefix);
        let function_prefix = regex::escape(&config.function_prefix);

        Ok(Self {
            class_decl: Regex::new(&format!(r"(?m)^class ({class_prefix}\w+):"))?,
            function_decl: Regex::new(&format!(
                r"(?m)^[ \t]*(?:async[ \t]+)?def ({function_prefix}\w+)\(([^)]*)\)(?:[ \t]*->[^:\n]*)?:"
            ))?,
            doc_block: Regex::new(
                r#"\A[ \t]*(?:#[^\n]*)?\r?\n\s*[rRuU]?(?:"""(?s:(.*?))"""|'''(?s:(.*?))''')"#,
            )?,
        })
    }
}

/// Patterns for the default `Test` / `test_` prefixes.
pub(crate) static DEFAULT_PATTERNS: Lazy<ScanPatterns> = Lazy::new(|| {
    ScanPatterns::new(&IndexerConfig::default()).expect("default scan patterns compile")
});
