use crate::core::{Error, ModulePath, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};

/// A discovered source file and the module path derived from its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Path relative to the walk root
    pub relative: PathBuf,
    pub module_path: ModulePath,
}

pub struct FileWalker {
    root: PathBuf,
    extension: String,
    ignore_patterns: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            root,
            extension: extension.into().trim_start_matches('.').to_string(),
            ignore_patterns: vec![],
        }
    }

    /// Exclude files whose root-relative path matches any glob. Invalid globs
    /// are skipped with a warning.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Self {
        self.ignore_patterns = patterns
            .iter()
            .filter_map(|pattern| match glob::Pattern::new(pattern) {
                Ok(compiled) => Some(compiled),
                Err(e) => {
                    log::warn!("Ignoring invalid discovery pattern {pattern:?}: {e}");
                    None
                }
            })
            .collect();
        self
    }

    /// All matching files, sorted by relative path.
    ///
    /// Only the configured ignore globs exclude files; `.gitignore`, `.ignore`
    /// and hidden-file rules are not applied. Entries that cannot be read are
    /// skipped with a warning.
    pub fn walk(&self) -> Result<Vec<SourceFile>> {
        if !self.root.is_dir() {
            return Err(Error::missing(&self.root));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root).standard_filters(false).build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!(
                        "Skipping unreadable entry under {}: {}",
                        self.root.display(),
                        e
                    );
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Ok(relative) = path.strip_prefix(&self.root) else {
                continue;
            };
            if self.should_process(relative) {
                files.push(SourceFile {
                    path: path.to_path_buf(),
                    relative: relative.to_path_buf(),
                    module_path: module_path_from_relative(relative),
                });
            }
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        tracing::debug!(
            root = %self.root.display(),
            extension = %self.extension,
            files = files.len(),
            "discovered source files"
        );
        Ok(files)
    }

    fn should_process(&self, relative: &Path) -> bool {
        let matches_extension = relative
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.extension);
        if !matches_extension {
            return false;
        }

        let relative_str = slash_path(relative);
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&relative_str))
    }
}

/// `a/b/c.py` becomes `["a", "b", "c"]`.
pub fn module_path_from_relative(relative: &Path) -> ModulePath {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(last) = segments.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }
    ModulePath::new(segments)
}

/// Forward-slash rendering of a relative path, for glob matching.
fn slash_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn find_source_files(
    root: &Path,
    extension: &str,
    ignore_patterns: &[String],
) -> Result<Vec<SourceFile>> {
    FileWalker::new(root.to_path_buf(), extension)
        .with_ignore_patterns(ignore_patterns)
        .walk()
}
