use anyhow::Result;
use clap::Parser;
use porttrack::cli::{Cli, Commands};
use porttrack::commands::{IndexConfig, MissingConfig, ModulesConfig};
use porttrack::config::{load_config, load_config_from, LoadedConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if cli.plain {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => porttrack::commands::init_config(force),
        Commands::Modules {
            origin_root,
            target_root,
        } => {
            let loaded = resolve_config(cli.config)?;
            porttrack::commands::analyze_modules(
                &loaded,
                ModulesConfig {
                    origin_root,
                    target_root,
                },
            )
        }
        Commands::Tests { origin } => {
            let loaded = resolve_config(cli.config)?;
            porttrack::commands::list_tests(&loaded, IndexConfig { origin })
        }
        Commands::Missing { origin, target } => {
            let loaded = resolve_config(cli.config)?;
            porttrack::commands::report_missing(&loaded, MissingConfig { origin, target })
        }
    }
}

fn resolve_config(explicit: Option<std::path::PathBuf>) -> Result<LoadedConfig> {
    let loaded = match explicit {
        Some(path) => load_config_from(&path)?,
        None => load_config(),
    };
    tracing::debug!(
        source = ?loaded.source,
        base_dir = %loaded.base_dir.display(),
        "configuration resolved"
    );
    Ok(loaded)
}
