//! Origin module path to target namespace mapping.
//!
//! Rules are tried in order and the first one that applies decides the shape
//! of the result:
//!
//! 1. A leading root alias (`pykotor`) is stripped, then rules 3 and 4 apply.
//! 2. A leading utility alias (`utility`) is replaced by the `Utility`
//!    namespace and the remaining segments pass through untouched.
//! 3. A `resource.formats.<fmt>` prefix becomes `Formats.<FMT>`, with any
//!    further segments appended verbatim.
//! 4. Everything else is title-cased segment by segment.
//!
//! Rules 2 and 3 keep their tails verbatim; only rule 4 changes case.

use crate::common::title_case;
use crate::core::{ModulePath, NamespacePath};
use serde::{Deserialize, Serialize};

/// Configurable literals used by [`map_module_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRules {
    /// Library root alias stripped from the front of a path
    #[serde(default = "default_root_prefix")]
    pub root_prefix: String,

    /// First segment that routes a module into the utility namespace
    #[serde(default = "default_utility_prefix")]
    pub utility_prefix: String,

    #[serde(default = "default_utility_namespace")]
    pub utility_namespace: String,

    /// Two leading segments that introduce a format identifier
    #[serde(default = "default_formats_pair")]
    pub formats_pair: [String; 2],

    #[serde(default = "default_formats_namespace")]
    pub formats_namespace: String,

    /// Separator used when rendering namespaces
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for MappingRules {
    fn default() -> Self {
        Self {
            root_prefix: default_root_prefix(),
            utility_prefix: default_utility_prefix(),
            utility_namespace: default_utility_namespace(),
            formats_pair: default_formats_pair(),
            formats_namespace: default_formats_namespace(),
            separator: default_separator(),
        }
    }
}

fn default_root_prefix() -> String {
    "pykotor".to_string()
}

fn default_utility_prefix() -> String {
    "utility".to_string()
}

fn default_utility_namespace() -> String {
    "Utility".to_string()
}

fn default_formats_pair() -> [String; 2] {
    ["resource".to_string(), "formats".to_string()]
}

fn default_formats_namespace() -> String {
    "Formats".to_string()
}

fn default_separator() -> String {
    ".".to_string()
}

impl MappingRules {
    /// Map and render in one step, using the configured separator.
    pub fn render(&self, origin: &ModulePath) -> String {
        map_module_path(origin, self).render(&self.separator)
    }
}

/// Map `origin` to its target namespace. Total over every input; an empty path
/// maps to an empty namespace.
pub fn map_module_path(origin: &ModulePath, rules: &MappingRules) -> NamespacePath {
    let segments = origin.segments();

    if let Some(rest) = strip_leading(segments, &rules.root_prefix) {
        return map_library_segments(rest, rules);
    }

    if let Some(rest) = strip_leading(segments, &rules.utility_prefix) {
        return NamespacePath::new(
            std::iter::once(rules.utility_namespace.clone()).chain(rest.iter().cloned()),
        );
    }

    map_library_segments(segments, rules)
}

/// Rules 3 and 4, shared by rooted and bare paths.
fn map_library_segments(segments: &[String], rules: &MappingRules) -> NamespacePath {
    match segments {
        [first, second, format, tail @ ..]
            if *first == rules.formats_pair[0] && *second == rules.formats_pair[1] =>
        {
            format_namespace(format, tail, rules)
        }
        _ => NamespacePath::new(segments.iter().map(|s| title_case(s))),
    }
}

fn format_namespace(format: &str, tail: &[String], rules: &MappingRules) -> NamespacePath {
    NamespacePath::new(
        [rules.formats_namespace.clone(), format.to_uppercase()]
            .into_iter()
            .chain(tail.iter().cloned()),
    )
}

/// Strip `prefix` when it leads the path and something follows it.
fn strip_leading<'a>(segments: &'a [String], prefix: &str) -> Option<&'a [String]> {
    match segments {
        [first, rest @ ..] if first == prefix && !rest.is_empty() => Some(rest),
        _ => None,
    }
}
