//! `[commit]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [commit]
//! remote = "origin"
//! fallback_branch = "main"     # Used when HEAD is detached or unborn
//! push = true
//! default_message = "feat: update content via CMS"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Commit helper settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Remote pushed to after committing.
    pub remote: String,

    /// Branch pushed when the current one cannot be determined.
    pub fallback_branch: String,

    /// Push after a successful commit.
    pub push: bool,

    /// Message used by the admin server when the form sends none.
    pub default_message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            fallback_branch: "main".to_string(),
            push: true,
            default_message: "feat: update content via CMS".to_string(),
        }
    }
}

impl CommitConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.remote.trim().is_empty() {
            diag.error("commit.remote", "must not be empty");
        }
        if self.fallback_branch.trim().is_empty() {
            diag.error("commit.fallback_branch", "must not be empty");
        }
    }
}
