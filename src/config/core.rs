use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::indexer::IndexerConfig;
use crate::mapping::MappingRules;

/// Root configuration structure for porttrack
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PorttrackConfig {
    /// Origin and target locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Module-to-namespace mapping literals
    #[serde(default)]
    pub mapping: MappingRules,

    /// Test class and function prefixes
    #[serde(default)]
    pub indexer: IndexerConfig,

    /// File discovery filters
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Report display limits
    #[serde(default)]
    pub report: ReportConfig,
}

impl PorttrackConfig {
    /// Replace values that cannot be used with their defaults, returning a
    /// description of each replacement.
    pub fn normalize(&mut self) -> Vec<String> {
        let mut fixes = Vec::new();
        if self.report.group_limit == 0 {
            fixes.push(format!(
                "report.group_limit must be at least 1, using {}",
                default_group_limit()
            ));
            self.report.group_limit = default_group_limit();
        }
        if self.mapping.separator.is_empty() {
            fixes.push("mapping.separator must not be empty, using \".\"".to_string());
            self.mapping.separator = ".".to_string();
        }
        fixes
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathsConfig {
    /// Root of the origin library sources
    #[serde(default = "default_origin_root")]
    pub origin_root: PathBuf,

    #[serde(default = "default_origin_extension")]
    pub origin_extension: String,

    /// Root of the target library sources
    #[serde(default = "default_target_root")]
    pub target_root: PathBuf,

    #[serde(default = "default_target_extension")]
    pub target_extension: String,

    /// Origin test file to index
    #[serde(default = "default_origin_tests")]
    pub origin_tests: PathBuf,

    /// Target test file carrying provenance markers
    #[serde(default = "default_target_tests")]
    pub target_tests: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            origin_root: default_origin_root(),
            origin_extension: default_origin_extension(),
            target_root: default_target_root(),
            target_extension: default_target_extension(),
            origin_tests: default_origin_tests(),
            target_tests: default_target_tests(),
        }
    }
}

fn default_origin_root() -> PathBuf {
    PathBuf::from("vendor/PyKotor/Libraries/PyKotor/src")
}

fn default_origin_extension() -> String {
    "py".to_string()
}

fn default_target_root() -> PathBuf {
    PathBuf::from("src/CSharpKOTOR")
}

fn default_target_extension() -> String {
    "cs".to_string()
}

fn default_origin_tests() -> PathBuf {
    PathBuf::from("vendor/PyKotor/Tools/HolocronToolset/tests/gui/windows/test_indoor_builder.py")
}

fn default_target_tests() -> PathBuf {
    PathBuf::from("src/Tests/HolocronToolset.Tests/Windows/IndoorBuilderTests.cs")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryConfig {
    /// Globs, relative to the walk root, excluded from discovery
    #[serde(default = "default_ignore_patterns")]
    pub ignore: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignore_patterns(),
        }
    }
}

fn default_ignore_patterns() -> Vec<String> {
    vec!["**/__pycache__/**".to_string(), "**/__init__.py".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Entries shown per group in the module report
    #[serde(default = "default_group_limit")]
    pub group_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            group_limit: default_group_limit(),
        }
    }
}

fn default_group_limit() -> usize {
    10
}
