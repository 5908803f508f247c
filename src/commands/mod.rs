//! CLI command implementations for porttrack.
//!
//! Available commands:
//! - **modules**: Map origin modules to target namespaces
//! - **tests**: List the test functions of an origin test file
//! - **missing**: List origin tests that have no provenance marker yet
//! - **init**: Write a default `.porttrack.toml`
//!
//! Each handler builds its result through a pure function and prints the
//! rendered report, so the results can be checked without capturing stdout.

pub mod index;
pub mod init;
pub mod missing;
pub mod modules;

pub use index::{index_tests, list_tests, IndexConfig};
pub use init::{init_config, write_default_config};
pub use missing::{find_missing, report_missing, MissingConfig};
pub use modules::{analyze_modules, build_module_report, ModulesConfig};
