use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoadedConfig;
use crate::core::Error;
use crate::io::{find_source_files, SourceFile};
use crate::report::{render_module_report, ModuleReport};

/// Roots given on the command line; `None` falls back to the configuration.
#[derive(Debug, Default)]
pub struct ModulesConfig {
    pub origin_root: Option<PathBuf>,
    pub target_root: Option<PathBuf>,
}

pub fn build_module_report(loaded: &LoadedConfig, options: &ModulesConfig) -> Result<ModuleReport> {
    let config = &loaded.config;
    let origin_root = options
        .origin_root
        .clone()
        .unwrap_or_else(|| loaded.resolve(&config.paths.origin_root));
    let target_root = options
        .target_root
        .clone()
        .unwrap_or_else(|| loaded.resolve(&config.paths.target_root));

    let origin = find_source_files(
        &origin_root,
        &config.paths.origin_extension,
        &config.discovery.ignore,
    )
    .with_context(|| format!("Failed to discover origin modules in {}", origin_root.display()))?;

    let target = discover_target_files(&target_root, &config.paths.target_extension)?;

    Ok(ModuleReport::build(&origin, &target, &config.mapping))
}

/// A missing target tree means nothing has been ported yet.
fn discover_target_files(root: &std::path::Path, extension: &str) -> Result<Vec<SourceFile>> {
    match find_source_files(root, extension, &[]) {
        Ok(files) => Ok(files),
        Err(e @ Error::MissingInputFile { .. }) => {
            tracing::warn!("{e}; reporting zero target files");
            Ok(Vec::new())
        }
        Err(e) => Err(e).with_context(|| {
            format!("Failed to discover target files in {}", root.display())
        }),
    }
}

pub fn analyze_modules(loaded: &LoadedConfig, options: ModulesConfig) -> Result<()> {
    let _span = tracing::info_span!("modules").entered();
    let report = build_module_report(loaded, &options)?;
    tracing::info!(
        origin = report.origin_count,
        target = report.target_count,
        groups = report.groups.len(),
        "module analysis complete"
    );
    print!(
        "{}",
        render_module_report(&report, loaded.config.report.group_limit)
    );
    Ok(())
}
