use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::PorttrackConfig;
use crate::core::{Error, Result};

/// Name of the configuration file searched for in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = ".porttrack.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with the directory its relative paths resolve
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: PorttrackConfig,
    pub base_dir: PathBuf,
    /// File the configuration came from, if any
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    pub fn defaults_in(base_dir: PathBuf) -> Self {
        Self {
            config: PorttrackConfig::default(),
            base_dir,
            source: None,
        }
    }

    /// Resolve a configured path against [`LoadedConfig::base_dir`].
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string and normalize unusable values.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<PorttrackConfig, String> {
    let mut config = toml::from_str::<PorttrackConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    for fix in config.normalize() {
        eprintln!("Warning: {}", fix);
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<PorttrackConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` followed by its ancestors, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for [`CONFIG_FILE_NAME`]. Falls back to
/// defaults resolved against `start`.
pub fn load_config_in(start: &Path) -> LoadedConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .find_map(|dir| {
            let path = dir.join(CONFIG_FILE_NAME);
            try_load_config_from_path(&path).map(|config| LoadedConfig {
                config,
                base_dir: dir,
                source: Some(path),
            })
        })
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig::defaults_in(start.to_path_buf())
        })
}

/// Search from the current directory.
pub fn load_config() -> LoadedConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_in(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LoadedConfig::defaults_in(PathBuf::from("."))
        }
    }
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// invalid file is an error.
pub fn load_config_from(path: &Path) -> Result<LoadedConfig> {
    let contents = read_config_file(path).map_err(|e| Error::from_io(path, e))?;
    let config = parse_and_validate_config(&contents).map_err(|e| Error::config(path, e))?;
    log::debug!("Loaded config from {}", path.display());

    let base_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok(LoadedConfig {
        config,
        base_dir,
        source: Some(path.to_path_buf()),
    })
}
