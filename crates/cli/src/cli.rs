use anyhow::{Context, Result};
use autointerface_core::Config;
use clap::{Parser, Subcommand};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::commands::{generate_command, init_command, inspect_command};

#[derive(Parser, Debug)]
#[command(name = "autointerface")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate interface sources from serialized compilations
    #[command(visible_alias = "g")]
    Generate {
        /// Compilation JSON files, or directories searched for them
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Directory receiving one `.g.cs` file per generated unit (stdout when absent)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Configuration file to use instead of searching from the input
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Do not emit the marker attribute sources
        #[arg(long)]
        no_attributes: bool,

        /// Project candidates in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print the interface models built for a compilation as JSON
    #[command(visible_alias = "i")]
    Inspect {
        /// Compilation JSON file
        input: PathBuf,

        /// Only show the interface generated from this class
        #[arg(long)]
        class: Option<String>,
    },
    /// Write a default .autointerface.json
    Init {
        /// Specify the current working directory
        #[arg(long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Configuration this command runs with: the explicit file, else the
    /// nearest one above the input, else the defaults
    pub fn load_config(&self) -> Result<Config> {
        let (explicit, start) = match self {
            Commands::Generate { config, inputs, .. } => {
                (config.as_deref(), inputs.first().map(PathBuf::as_path))
            }
            Commands::Inspect { input, .. } => (None, Some(input.as_path())),
            Commands::Init { .. } => return Ok(Config::default()),
        };

        if let Some(path) = explicit {
            return Config::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }

        let start = match start {
            Some(path) => search_root(path),
            None => env::current_dir().context("Failed to get current directory")?,
        };
        match Config::find_config_file(&start) {
            Some(path) => {
                debug!("Using config {}", path.display());
                Config::load_from_file(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))
            }
            None => Ok(Config::default()),
        }
    }

    /// Execute the command
    pub fn execute(self, mut config: Config) -> Result<()> {
        match self {
            Commands::Generate {
                inputs,
                out,
                no_attributes,
                parallel,
                ..
            } => {
                if no_attributes {
                    config.emit_marker_attributes = false;
                }
                if parallel {
                    config.parallel = true;
                }
                generate_command(&inputs, out.as_deref(), config)
            }
            Commands::Inspect { input, class } => inspect_command(&input, class.as_deref(), config),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}

fn search_root(input: &Path) -> PathBuf {
    let absolute = if input.is_absolute() {
        input.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(input))
            .unwrap_or_else(|_| input.to_path_buf())
    };
    if absolute.is_dir() {
        absolute
    } else {
        absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(absolute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "autointerface",
            "generate",
            "a.json",
            "dir",
            "--out",
            "generated",
            "--no-attributes",
        ]);
        match cli.command {
            Commands::Generate {
                inputs,
                out,
                no_attributes,
                parallel,
                ..
            } => {
                assert_eq!(inputs, vec![PathBuf::from("a.json"), PathBuf::from("dir")]);
                assert_eq!(out, Some(PathBuf::from("generated")));
                assert!(no_attributes);
                assert!(!parallel);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_config_found_next_to_input() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config {
            documentation: autointerface_core::DocumentationMode::Copy,
            ..Default::default()
        };
        config
            .save_to_file(&temp.path().join(".autointerface.json"))
            .unwrap();

        let command = Commands::Inspect {
            input: temp.path().join("compilation.json"),
            class: None,
        };
        assert_eq!(command.load_config().unwrap(), config);
    }
}
