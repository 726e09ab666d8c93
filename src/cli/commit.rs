//! `folio commit`: stage, commit and push site changes.

use crate::config::FolioConfig;
use crate::log;
use crate::utils::git::{self, CommitOutcome};
use anyhow::Result;

pub fn commit_site(message: Option<&str>, status_only: bool, config: &FolioConfig) -> Result<()> {
    let root = config.get_root();

    if status_only {
        let lines = git::status(root)?;
        if lines.is_empty() {
            log!("git"; "working tree clean");
        } else {
            for line in &lines {
                println!("{line}");
            }
        }
        return Ok(());
    }

    match git::commit_and_push(root, &config.commit, message)? {
        CommitOutcome::NoChanges => log!("commit"; "no changes"),
        CommitOutcome::Committed { message, pushed: true } => {
            log!("commit"; "committed and pushed: {}", message);
        }
        CommitOutcome::Committed { message, pushed: false } => {
            log!("commit"; "committed (not pushed): {}", message);
        }
    }
    Ok(())
}
