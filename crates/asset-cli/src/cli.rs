//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Asset Manager - Copy package assets into a project's public root
#[derive(Parser, Debug)]
#[command(name = "asset-manager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, env = "ASSET_MANAGER_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install the assets of one or more packages
    Install {
        /// Package names, resolved below the vendor directory
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Remove the assets of one or more packages
    Uninstall {
        /// Package names, resolved below the vendor directory
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Replace the assets of one package with those of another
    Update {
        /// Package whose assets are removed
        from: String,
        /// Package whose assets are installed
        to: String,
    },

    /// Run a plan of operations, uninstalls first
    ///
    /// The plan is a TOML, JSON or YAML file with a list of operations:
    ///
    ///   [[operations]]
    ///   kind = "update"
    ///   from = "acme/widget-legacy"
    ///   to = "acme/widget"
    Apply {
        /// Plan file
        plan: PathBuf,
    },

    /// Show whether a package's configuration is safe and what it declares
    Inspect {
        /// Package name
        package: String,
    },

    /// List installed asset namespaces
    Status,

    /// Generate shell completions
    ///
    /// Examples:
    ///   asset-manager completions bash > ~/.local/share/bash-completion/completions/asset-manager
    ///   asset-manager completions zsh > ~/.zfunc/_asset-manager
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_install_multiple_packages() {
        let cli = Cli::parse_from(["asset-manager", "install", "acme/widget", "acme/gadget"]);
        assert_eq!(
            cli.command,
            Commands::Install {
                packages: vec!["acme/widget".into(), "acme/gadget".into()]
            }
        );
    }

    #[test]
    fn install_requires_a_package() {
        assert!(Cli::try_parse_from(["asset-manager", "install"]).is_err());
    }

    #[test]
    fn parse_update_command() {
        let cli = Cli::parse_from(["asset-manager", "update", "old", "new"]);
        assert_eq!(
            cli.command,
            Commands::Update {
                from: "old".into(),
                to: "new".into()
            }
        );
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "asset-manager",
            "status",
            "--json",
            "-v",
            "--project-root",
            "/srv/app",
        ]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.project_root, Some(PathBuf::from("/srv/app")));
        assert_eq!(cli.command, Commands::Status);
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["asset-manager", "completions", "bash"]);
        assert!(matches!(cli.command, Commands::Completions { .. }));
    }
}
