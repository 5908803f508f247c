//! Configuration for porttrack.
//!
//! Settings live in `.porttrack.toml`, found by walking up from the working
//! directory. Every table and field is optional; missing values take the
//! defaults defined next to each type.

mod core;
mod loader;

pub use self::core::{DiscoveryConfig, PathsConfig, PorttrackConfig, ReportConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_in,
    parse_and_validate_config, LoadedConfig, CONFIG_FILE_NAME,
};
