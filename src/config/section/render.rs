//! `[render]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [render]
//! output = "work.html"
//! backup = ["work.html", "projects.html", "publications.html", "photography.html"]
//! ```

use serde::{Deserialize, Serialize};

use super::check_file_name;
use crate::config::ConfigDiagnostics;

/// Work page rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page written by `folio render`.
    pub output: String,

    /// Pages copied into `backup_<timestamp>/` by `--backup`.
    pub backup: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: "work.html".to_string(),
            backup: ["work.html", "projects.html", "publications.html", "photography.html"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_file_name("render.output", &self.output, diag);
        for name in &self.backup {
            check_file_name("render.backup", name, diag);
        }
    }
}
