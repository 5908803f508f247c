pub mod walker;

pub use walker::{find_source_files, module_path_from_relative, FileWalker, SourceFile};

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a whole source file as UTF-8.
///
/// A missing file is reported as [`Error::MissingInputFile`] and undecodable
/// bytes as [`Error::Encoding`]; no fallback encoding is tried.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::from_io(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::from_io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_source(&temp.path().join("test_x.py")).unwrap_err();
        assert!(err.is_missing_input());
    }

    #[test]
    fn test_read_source_rejects_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.py");
        fs::write(&path, [0x63, 0x61, 0x66, 0xE9, 0x0A]).unwrap();

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, Error::Encoding { .. }));
    }

    #[test]
    fn test_read_source_round_trips_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ok.py");
        write_file(&path, "class TestA:\n").unwrap();
        assert!(path.is_file());
        assert_eq!(read_source(&path).unwrap(), "class TestA:\n");
    }
}
