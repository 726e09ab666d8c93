//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! root = "."          # Site root, relative to folio.toml (`~` is expanded)
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site location settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the static pages and data files.
    pub root: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}
