use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoadedConfig;
use crate::core::TestEntry;
use crate::indexer::{ScanPatterns, TestIndex};
use crate::io::read_source;
use crate::report::render_test_index;

#[derive(Debug, Default)]
pub struct IndexConfig {
    /// Origin test file; defaults to `paths.origin_tests`
    pub origin: Option<PathBuf>,
}

pub fn index_tests(loaded: &LoadedConfig, options: &IndexConfig) -> Result<Vec<TestEntry>> {
    let origin = options
        .origin
        .clone()
        .unwrap_or_else(|| loaded.resolve(&loaded.config.paths.origin_tests));
    let patterns = ScanPatterns::new(&loaded.config.indexer)
        .context("Invalid test prefixes in [indexer] configuration")?;

    let source = read_source(&origin)?;
    let index = TestIndex::build(&source, &patterns);
    for name in index.duplicate_names() {
        tracing::warn!("{name} is declared more than once in {}", origin.display());
    }
    tracing::debug!(classes = index.by_class().len(), "grouped origin tests");
    Ok(index.entries)
}

pub fn list_tests(loaded: &LoadedConfig, options: IndexConfig) -> Result<()> {
    let _span = tracing::info_span!("tests").entered();
    let entries = index_tests(loaded, &options)?;
    tracing::info!(tests = entries.len(), "indexed origin tests");
    print!("{}", render_test_index(&entries));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_index_tests_uses_configured_prefixes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("spec_builder.py");
        fs::write(
            &path,
            indoc! {"
                class CheckBuilder:
                    def check_places_room(self):
                        pass

                    def test_ignored(self):
                        pass
            "},
        )
        .unwrap();

        let mut loaded = LoadedConfig::defaults_in(temp.path().to_path_buf());
        loaded.config.indexer.class_prefix = "Check".to_string();
        loaded.config.indexer.function_prefix = "check_".to_string();
        let options = IndexConfig {
            origin: Some(path),
        };

        let entries = index_tests(&loaded, &options).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.qualified_name()).collect();
        assert_eq!(names, ["CheckBuilder::check_places_room"]);
    }

    #[test]
    fn test_missing_origin_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let loaded = LoadedConfig::defaults_in(temp.path().to_path_buf());
        let err = index_tests(&loaded, &IndexConfig::default()).unwrap_err();
        assert!(err.to_string().contains("test_indoor_builder.py not found"));
    }
}
