mod check;
mod completions;
mod files;
mod plan;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use files::FilesCommand;
use plan::PlanCommand;
use rustgen_config::GeneratorConfig;

use crate::ops;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for rustgen_config::Result<T> {
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

#[derive(Parser)]
#[command(name = "rustgen")]
#[command(version)]
#[command(about = "Plan Rust API clients from parsed OpenAPI documents")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Files(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Name every model and operation and report renames
    Check(CheckCommand),

    /// Print the generation plan as JSON
    Plan(PlanCommand),

    /// List supporting files and output folders
    Files(FilesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Configuration file and overrides shared by every command.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Path to rustgen.toml (defaults to ./rustgen.toml when it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the generated package name
    #[arg(long)]
    pub package_name: Option<String>,

    /// Override the generated package version
    #[arg(long)]
    pub package_version: Option<String>,

    /// Override the output folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the configuration and apply command-line overrides.
    pub fn load(&self) -> GeneratorConfig {
        let config = ops::load_config(self.config.as_deref()).unwrap_or_exit();
        self.apply(config)
    }

    fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(name) = &self.package_name {
            config = config.with_package_name(name);
        }
        if let Some(version) = &self.package_version {
            config = config.with_package_version(version);
        }
        if let Some(output) = &self.output {
            config = config.with_output_folder(output);
        }
        config
    }
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
    fn test_overrides_win() {
        let args = ConfigArgs {
            config: None,
            package_name: Some("petstore".to_string()),
            package_version: None,
            output: Some(PathBuf::from("out")),
        };
        let config = args.apply(GeneratorConfig::default().with_package_version("3.1.0"));

        assert_eq!(config.package.name, "petstore");
        assert_eq!(config.package.version, "3.1.0");
        assert_eq!(config.output.folder, PathBuf::from("out"));
    }

    #[test]
    fn test_parse_plan_args() {
        let cli = Cli::try_parse_from([
            "rustgen",
            "plan",
            "petstore.json",
            "--pretty",
            "-c",
            "custom.toml",
            "--package-name",
            "petstore",
        ])
        .unwrap();

        match cli.command {
            Commands::Plan(cmd) => {
                assert!(cmd.pretty);
                assert_eq!(cmd.document, PathBuf::from("petstore.json"));
                assert_eq!(cmd.config.config, Some(PathBuf::from("custom.toml")));
                assert_eq!(cmd.config.package_name.as_deref(), Some("petstore"));
            }
            _ => panic!("expected plan command"),
        }
    }
}
