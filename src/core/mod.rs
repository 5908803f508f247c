pub mod errors;

pub use errors::{Error, Result};

use std::fmt;

/// Class name attached to tests that appear before any recognised class.
pub const UNKNOWN_CLASS: &str = "Unknown";

/// Segment sequence identifying an origin module, e.g. `["pykotor", "resource", "formats", "gff"]`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a dotted module name (`resource.formats.gff`) into segments.
    pub fn parse_dotted(dotted: &str) -> Self {
        Self::new(dotted.split('.').filter(|s| !s.is_empty()))
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// Target-side location derived from a [`ModulePath`]. Never mapped back.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn render(&self, separator: &str) -> String {
        self.segments.join(separator)
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("."))
    }
}

/// A class declaration seen during a single scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassMarker {
    pub offset: usize,
    pub name: String,
}

/// One origin test function, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestEntry {
    pub class_name: String,
    pub name: String,
    pub params: String,
    /// First line of the docstring, or empty
    pub doc: String,
    /// Byte offset of the declaration line
    pub offset: usize,
    /// 1-based line of the declaration
    pub line: usize,
}

impl TestEntry {
    /// `Class::name`, as shown in reports.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.class_name, self.name)
    }
}

/// A test that has no provenance marker in the target source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingTest {
    pub class_name: String,
    pub name: String,
    pub doc: String,
}

/// Outcome of comparing origin tests against ported markers.
///
/// Membership is decided on the function name alone. Two classes defining the
/// same test name count as one logical test: porting either marks both as done.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DiffResult {
    /// Number of origin entries
    pub total: usize,
    /// Number of distinct marker names in the target source
    pub ported: usize,
    /// Number of origin entries whose name carries a marker
    pub matched: usize,
    pub missing: Vec<MissingTest>,
    /// Marker names that match no origin entry, sorted
    pub stale_markers: Vec<String>,
}

impl DiffResult {
    /// Share of origin entries that carry a marker, in percent.
    pub fn completion_percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.matched as f64 * 100.0 / self.total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_path_parse_dotted() {
        let path = ModulePath::parse_dotted("resource.formats.gff");
        assert_eq!(path.segments(), &["resource", "formats", "gff"]);
        assert_eq!(path.first(), Some("resource"));
        assert_eq!(path.to_string(), "resource.formats.gff");
    }

    #[test]
    fn test_module_path_parse_dotted_skips_empty_segments() {
        let path = ModulePath::parse_dotted(".a..b.");
        assert_eq!(path.segments(), &["a", "b"]);
    }

    #[test]
    fn test_namespace_render_with_custom_separator() {
        let ns = NamespacePath::new(["Formats", "GFF"]);
        assert_eq!(ns.render("::"), "Formats::GFF");
        assert_eq!(ns.to_string(), "Formats.GFF");
    }

    #[test]
    fn test_entry_qualified_name() {
        let entry = TestEntry {
            class_name: "TestFoo".to_string(),
            name: "test_bar".to_string(),
            params: "self".to_string(),
            doc: String::new(),
            offset: 0,
            line: 1,
        };
        assert_eq!(entry.qualified_name(), "TestFoo::test_bar");
    }

    #[test]
    fn test_completion_percent() {
        let empty = DiffResult::default();
        assert_eq!(empty.completion_percent(), 100.0);

        let half = DiffResult {
            total: 4,
            ported: 2,
            matched: 2,
            ..Default::default()
        };
        assert_eq!(half.completion_percent(), 50.0);
    }
}
