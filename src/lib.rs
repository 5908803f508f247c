//! Porting progress tracking.
//!
//! Three independent pieces, each a pure function over source text:
//!
//! - [`mapping`] translates origin module paths into target namespaces
//! - [`indexer`] recovers `(class, test, params, doc)` entries from a test file
//! - [`diff`] finds origin tests that carry no provenance marker in the target
//!
//! File discovery, configuration, and report rendering live around them.

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod diff;
pub mod indexer;
pub mod io;
pub mod mapping;
pub mod report;

// Re-export commonly used types
pub use crate::core::{
    ClassMarker, DiffResult, Error, MissingTest, ModulePath, NamespacePath, Result, TestEntry,
    UNKNOWN_CLASS,
};

pub use crate::diff::{diff, diff_against, MarkerPattern, PortedMarkerSet};

pub use crate::indexer::{index, index_with, IndexerConfig, ScanPatterns, TestIndex};

pub use crate::mapping::{map_module_path, MappingRules};

pub use crate::io::{find_source_files, read_source, FileWalker, SourceFile};

pub use crate::config::{LoadedConfig, PorttrackConfig};
