use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Porttrack Configuration

[paths]
# Origin library sources, mapped by `porttrack modules`
origin_root = "vendor/PyKotor/Libraries/PyKotor/src"
origin_extension = "py"
target_root = "src/CSharpKOTOR"
target_extension = "cs"

# Test files compared by `porttrack tests` and `porttrack missing`
origin_tests = "vendor/PyKotor/Tools/HolocronToolset/tests/gui/windows/test_indoor_builder.py"
target_tests = "src/Tests/HolocronToolset.Tests/Windows/IndoorBuilderTests.cs"

[mapping]
root_prefix = "pykotor"
utility_prefix = "utility"
utility_namespace = "Utility"
formats_pair = ["resource", "formats"]
formats_namespace = "Formats"
separator = "."

[indexer]
class_prefix = "Test"
function_prefix = "test_"

[discovery]
ignore = [
    "**/__pycache__/**",
    "**/__init__.py"
]

[report]
group_limit = 10
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
