//! `folio render`: rebuild the work page from a CMS export.

use crate::config::FolioConfig;
use crate::log;
use crate::render::{backup_current_files, update_from_json};
use anyhow::Result;
use std::path::Path;

pub fn render_site(json_file: &Path, backup: bool, config: &FolioConfig) -> Result<()> {
    if backup {
        let dir = backup_current_files(config)?;
        log!("render"; "backup saved to {}", dir.display());
    }

    if update_from_json(json_file, config)?.is_none() {
        log!("render"; "nothing rendered");
    }
    Ok(())
}
