mod check;
mod clean;
mod completions;
mod info;
mod init;
mod synth;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;
use init::InitCommand;
use kiln_manifest::KilnToml;
use synth::SynthCommand;

/// The `-c/--config` flag shared by commands that read a descriptor.
#[derive(Args)]
pub(crate) struct DescriptorArg {
    /// Path to the project descriptor
    #[arg(short, long = "config", value_name = "FILE", default_value = "kiln.toml")]
    path: PathBuf,
}

impl DescriptorArg {
    /// Read and validate the descriptor, exiting with a rendered report on failure.
    pub fn load(&self) -> KilnToml {
        KilnToml::open(&self.path).unwrap_or_exit()
    }
}

/// Extension trait for exiting on descriptor and synthesis errors with
/// pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for kiln_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for kiln_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "kiln")]
#[command(version)]
#[command(about = "Synthesize construct library project files from kiln.toml")]
pub(crate) struct Cli {
    /// Log debug output to stderr (overrides KILN_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Synth(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter kiln.toml
    Init(InitCommand),

    /// Generate project files from kiln.toml
    Synth(SynthCommand),

    /// Validate kiln.toml without writing files
    Check(CheckCommand),

    /// Show the resolved project
    Info(InfoCommand),

    /// Remove previously generated files
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["kiln", "synth", "--dry-run", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Synth(_)));
    }

    #[test]
    fn test_config_flag_default() {
        let cli = Cli::try_parse_from(["kiln", "check"]).unwrap();
        let Commands::Check(cmd) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(cmd.descriptor.path, PathBuf::from("kiln.toml"));

        let cli = Cli::try_parse_from(["kiln", "info", "-c", "lib/kiln.toml"]).unwrap();
        let Commands::Info(cmd) = cli.command else {
            panic!("expected info");
        };
        assert_eq!(cmd.descriptor.path, PathBuf::from("lib/kiln.toml"));
    }
}
