use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::LoadedConfig;
use crate::core::DiffResult;
use crate::diff::{diff_against, MarkerPattern, PortedMarkerSet};
use crate::indexer::{index_with, ScanPatterns};
use crate::io::read_source;
use crate::report::render_diff;

#[derive(Debug, Default)]
pub struct MissingConfig {
    /// Origin test file; defaults to `paths.origin_tests`
    pub origin: Option<PathBuf>,
    /// Target test file; defaults to `paths.target_tests`
    pub target: Option<PathBuf>,
}

pub fn find_missing(loaded: &LoadedConfig, options: &MissingConfig) -> Result<DiffResult> {
    let paths = &loaded.config.paths;
    let origin = options
        .origin
        .clone()
        .unwrap_or_else(|| loaded.resolve(&paths.origin_tests));
    let target = options
        .target
        .clone()
        .unwrap_or_else(|| loaded.resolve(&paths.target_tests));

    let indexer = &loaded.config.indexer;
    let patterns =
        ScanPatterns::new(indexer).context("Invalid test prefixes in [indexer] configuration")?;
    let marker = MarkerPattern::new(&indexer.function_prefix)
        .context("Invalid function prefix in [indexer] configuration")?;

    let origin_source = read_source(&origin)?;
    let target_source = read_source(&target)?;

    let entries = index_with(&origin_source, &patterns);
    let markers = PortedMarkerSet::scan_with(&target_source, &marker);
    Ok(diff_against(&entries, &markers))
}

pub fn report_missing(loaded: &LoadedConfig, options: MissingConfig) -> Result<()> {
    let _span = tracing::info_span!("missing").entered();
    let result = find_missing(loaded, &options)?;
    tracing::info!(
        total = result.total,
        ported = result.ported,
        completion = result.completion_percent(),
        "diff complete"
    );
    print!("{}", render_diff(&result));
    Ok(())
}
