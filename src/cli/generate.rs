//! `folio generate`: refresh page sections from the site config.

use crate::config::FolioConfig;
use crate::generate::{generate_all, watch_config};
use crate::log;
use anyhow::Result;

pub fn generate_site(watch_mode: bool, config: &FolioConfig) -> Result<()> {
    if watch_mode {
        return watch_config(config);
    }

    let report = generate_all(config)?;
    log!("generate"; "{}", report.summary());
    Ok(())
}
