use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "porttrack")]
#[command(about = "Track progress of porting a codebase to another language", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .porttrack.toml)
    #[arg(long, global = true, env = "PORTTRACK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map origin modules to target namespaces
    Modules {
        /// Origin source root (overrides paths.origin_root)
        #[arg(long)]
        origin_root: Option<PathBuf>,

        /// Target source root (overrides paths.target_root)
        #[arg(long)]
        target_root: Option<PathBuf>,
    },

    /// List test functions in the origin test file, grouped by class
    Tests {
        /// Origin test file (overrides paths.origin_tests)
        #[arg(long)]
        origin: Option<PathBuf>,
    },

    /// List origin tests without a provenance marker in the target test file
    Missing {
        /// Origin test file (overrides paths.origin_tests)
        #[arg(long)]
        origin: Option<PathBuf>,

        /// Target test file (overrides paths.target_tests)
        #[arg(long)]
        target: Option<PathBuf>,
    },

    /// Initialize a porttrack configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Default tracing filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["porttrack", "missing", "--target", "T.cs", "-vv", "--plain"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.plain);
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Commands::Missing { origin, target } => {
                assert_eq!(origin, None);
                assert_eq!(target, Some(PathBuf::from("T.cs")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_saturates_at_trace() {
        let cli = Cli::parse_from(["porttrack", "-vvvv", "tests"]);
        assert_eq!(cli.log_level(), "trace");
    }
}
