//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Content pipeline for a static personal website
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render the work page from a CMS JSON export
    #[command(visible_alias = "r")]
    Render {
        /// Path to the JSON data file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        json_file: PathBuf,

        /// Copy the current pages into backup_<timestamp>/ before writing
        #[arg(long)]
        backup: bool,

        /// Directory holding the HTML files (overrides [site] root)
        #[arg(long, value_hint = clap::ValueHint::DirPath)]
        base_dir: Option<PathBuf>,
    },

    /// Run the admin server (static files, save-file and git-commit endpoints)
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Commit site changes and push them to the remote
    #[command(visible_alias = "c")]
    Commit {
        /// Custom commit message
        #[arg(short, long)]
        message: Option<String>,

        /// Commit only, do not push
        #[arg(long)]
        no_push: bool,

        /// Show the working tree status only
        #[arg(long)]
        status: bool,
    },

    /// Update profile, contact, work and project sections from the site config
    #[command(visible_alias = "g")]
    Generate {
        /// Keep running and regenerate whenever the site config changes
        #[arg(short, long)]
        watch: bool,

        /// Site configuration JSON (overrides [generate] config)
        #[arg(long, value_hint = clap::ValueHint::FilePath)]
        site_config: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::parse_from(["folio", "render", "cms-data.json", "--backup", "--base-dir", "site"]);
        match cli.command {
            Commands::Render { json_file, backup, base_dir } => {
                assert_eq!(json_file, PathBuf::from("cms-data.json"));
                assert!(backup);
                assert_eq!(base_dir, Some(PathBuf::from("site")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_commit_flags() {
        let cli = Cli::parse_from(["folio", "commit", "-m", "feat: hi", "--no-push"]);
        match cli.command {
            Commands::Commit { message, no_push, status } => {
                assert_eq!(message.as_deref(), Some("feat: hi"));
                assert!(no_push);
                assert!(!status);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_port_and_global_config() {
        let cli = Cli::parse_from(["folio", "serve", "-p", "9000", "-C", "other.toml"]);
        assert!(cli.is_serve());
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Commands::Serve { port: Some(9000), .. }));
    }
}
