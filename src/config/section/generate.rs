//! `[generate]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [generate]
//! config = "website-config.json"
//! pages = ["index.html", "work.html", "contact.html"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::check_file_name;
use crate::config::ConfigDiagnostics;

/// Site generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Site configuration JSON (profile, contact, work, projects).
    pub config: PathBuf,

    /// Pages whose profile slots are refreshed.
    pub pages: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            config: PathBuf::from("website-config.json"),
            pages: [
                "index.html",
                "work.html",
                "projects.html",
                "blogs.html",
                "publications.html",
                "contact.html",
                "photography.html",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for page in &self.pages {
            check_file_name("generate.pages", page, diag);
        }
    }
}
