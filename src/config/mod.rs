//! Configuration for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site] [serve] [render] [generate] [commit]
//! ├── error.rs       # ConfigError, ConfigDiagnostics
//! ├── util.rs        # config discovery, path resolution
//! └── mod.rs         # FolioConfig (this file)
//! ```
//!
//! The loaded `FolioConfig` is passed by reference to every command.
//! Nothing reads the process working directory after loading.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{CommitConfig, GenerateConfig, RenderConfig, ServeConfig, SiteConfig};

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, resolve_against};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// `--config` as given, made absolute against the cwd (internal use only)
    #[serde(skip)]
    pub requested_config: PathBuf,

    /// Absolute site root (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub commit: CommitConfig,
}

impl FolioConfig {
    /// Load configuration for the parsed command line.
    ///
    /// The config file is optional: without one, defaults apply and the
    /// site root is the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let config_path = find_config_file(&cli.config, cwd);

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        let base = config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd)
            .to_path_buf();
        config.config_path = config_path;
        config.requested_config = cwd.join(&cli.config);
        config.finalize(cli, &base, cwd);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}: {}", path.display(), ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Resolve paths and apply command-line overrides.
    fn finalize(&mut self, cli: &Cli, base: &Path, cwd: &Path) {
        crate::logger::set_verbose(cli.verbose);

        self.root = crate::utils::path::normalize_path(&resolve_against(&self.site.root, base));
        self.generate.config = resolve_against(&self.generate.config, &self.root);

        match &cli.command {
            Commands::Render { base_dir, .. } => {
                if let Some(dir) = base_dir {
                    self.root = crate::utils::path::normalize_path(&resolve_against(dir, cwd));
                }
            }
            Commands::Serve { interface, port } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Commit { no_push, .. } => {
                if *no_push {
                    self.commit.push = false;
                }
            }
            Commands::Generate { site_config, .. } => {
                if let Some(path) = site_config {
                    self.generate.config = resolve_against(path, cwd);
                }
            }
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Get the site root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Config file a child `folio` process must load to see this same config.
    ///
    /// Falls back to the requested path when none was found, so the child
    /// also starts from defaults instead of searching upward on its own.
    pub fn child_config(&self) -> Option<&Path> {
        self.config_path
            .as_deref()
            .or_else(|| Some(self.requested_config.as_path()).filter(|p| !p.as_os_str().is_empty()))
    }

    /// Join a path with the site root.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.serve.validate(&mut diag);
        self.render.validate(&mut diag);
        self.generate.validate(&mut diag);
        self.commit.validate(&mut diag);

        if diag.has_errors() {
            debug!("config"; "{} problem(s) found", diag.len());
        }
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> FolioConfig {
    let (parsed, ignored) = FolioConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Default config rooted at `root`.
#[cfg(test)]
pub fn test_config_at(root: &Path) -> FolioConfig {
    FolioConfig {
        root: root.to_path_buf(),
        generate: GenerateConfig {
            config: root.join("website-config.json"),
            ..GenerateConfig::default()
        },
        ..FolioConfig::default()
    }
}

// ============================================================================
// tests
// ============================================================================
