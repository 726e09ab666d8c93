//! Git operations for publishing site changes.
//!
//! Repository discovery and the current branch come from `gix`; staging,
//! committing and pushing go through the `git` binary so the user's hooks,
//! credentials and config apply.

mod message;
mod repo;

pub use message::{ChangeKind, CommitStatus, commit_status, push_failed, timestamp};
pub use repo::{current_branch, discover, repo_root};

use crate::config::CommitConfig;
use crate::log;
use crate::utils::exec::{Cmd, GIT_FILTER};
use anyhow::Result;
use gix::Repository;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommitError {
    #[error("{0} is not inside a git repository")]
    NotARepo(PathBuf),

    #[error("git commit failed: {0}")]
    Commit(String),

    #[error("git push to {remote}/{branch} failed: {detail}")]
    Push {
        remote: String,
        branch: String,
        detail: String,
    },
}

/// What `commit_and_push` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Committed { message: String, pushed: bool },
}

/// Porcelain status lines for the part of the repository under `dir`.
pub fn status(dir: &Path) -> Result<Vec<String>> {
    open(dir)?;
    porcelain(dir)
}

/// Repository containing `dir`, which must have a working tree.
fn open(dir: &Path) -> Result<Repository> {
    discover(dir)
        .filter(|repo| repo_root(repo).is_some())
        .ok_or_else(|| CommitError::NotARepo(dir.to_path_buf()).into())
}

fn porcelain(dir: &Path) -> Result<Vec<String>> {
    let out = crate::exec!(dir; "git"; "status", "--porcelain", "--", ".")?;
    Ok(String::from_utf8_lossy(&out.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Names of changed files under `dir`, unstaged first, falling back to the index.
fn changed_files(dir: &Path) -> Result<Vec<String>> {
    for extra in [None, Some("--cached")] {
        let mut cmd = Cmd::new("git").args(["diff", "--name-only"]).cwd(dir);
        if let Some(flag) = extra {
            cmd = cmd.arg(flag);
        }
        let out = cmd.args(["--", "."]).capture()?;
        let files: Vec<String> = out.stdout.lines().map(str::to_string).collect();
        if !files.is_empty() {
            return Ok(files);
        }
    }
    Ok(Vec::new())
}

/// Stage everything under `dir`, commit it, and optionally push.
///
/// Only paths under `dir` are staged and committed, so a site kept in a
/// subdirectory never publishes the rest of its repository.
pub fn commit_and_push(
    dir: &Path,
    config: &CommitConfig,
    message: Option<&str>,
) -> Result<CommitOutcome> {
    let repo = open(dir)?;

    if porcelain(dir)?.is_empty() {
        log!("git"; "no changes to commit");
        return Ok(CommitOutcome::NoChanges);
    }

    // warnings on stderr are logged, only a failed exit aborts
    Cmd::new("git")
        .args(["add", "."])
        .cwd(dir)
        .filter(&GIT_FILTER)
        .run()?;

    let message = match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => m.to_string(),
        None => ChangeKind::classify(&changed_files(dir)?).message(&timestamp()),
    };

    let committed = Cmd::new("git")
        .args(["commit", "-m", message.as_str(), "--", "."])
        .cwd(dir)
        .capture()?;
    match commit_status(committed.success, &committed.stdout, &committed.stderr) {
        CommitStatus::NothingToCommit => {
            log!("git"; "nothing to commit");
            return Ok(CommitOutcome::NoChanges);
        }
        CommitStatus::Failed => {
            let detail = if committed.stderr.is_empty() {
                committed.stdout
            } else {
                committed.stderr
            };
            return Err(CommitError::Commit(detail).into());
        }
        CommitStatus::Committed => log!("git"; "committed: {}", message),
    }

    if !config.push {
        return Ok(CommitOutcome::Committed { message, pushed: false });
    }

    let branch = current_branch(&repo).unwrap_or_else(|| config.fallback_branch.clone());
    let pushed = Cmd::new("git")
        .args(["push", config.remote.as_str(), branch.as_str()])
        .cwd(dir)
        .capture()?;
    if push_failed(pushed.success, &pushed.stderr) {
        return Err(CommitError::Push {
            remote: config.remote.clone(),
            branch,
            detail: pushed.stderr,
        }
        .into());
    }
    log!("git"; "pushed to {}/{}", config.remote, branch);

    Ok(CommitOutcome::Committed { message, pushed: true })
}
