//! POST endpoints of the admin server.

use crate::config::FolioConfig;
use crate::utils::exec::Cmd;
use crate::utils::path::is_plain_file_name;
use anyhow::Context;
use serde::Deserialize;
use serde_json::{Value, json};
use std::{fs, path::Path};
use thiserror::Error;

/// Failure of an API call, carrying the HTTP status it maps to.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Internal(_) => 500,
        }
    }
}

fn parse_body<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {e}")))
}

#[derive(Deserialize)]
struct SaveRequest {
    filename: Option<String>,
    content: Option<String>,
}

/// `POST /save-file`: overwrite one top-level file under `root`.
pub fn save_file(root: &Path, body: &str) -> Result<Value, ApiError> {
    let request: SaveRequest = parse_body(body)?;

    let (Some(filename), Some(content)) = (request.filename, request.content) else {
        return Err(ApiError::BadRequest("Missing filename or content".into()));
    };
    if filename.is_empty() {
        return Err(ApiError::BadRequest("Missing filename or content".into()));
    }
    if !is_plain_file_name(&filename) {
        return Err(ApiError::BadRequest("Invalid filename".into()));
    }

    let path = root.join(&filename);
    fs::write(&path, content)
        .map_err(|e| ApiError::Internal(format!("Error saving file: {e}")))?;

    Ok(json!({
        "success": true,
        "message": format!("File {filename} saved successfully"),
        "filename": filename,
    }))
}

#[derive(Deserialize)]
struct CommitRequest {
    message: Option<String>,
}

/// `POST /git-commit`: run `folio commit` as a child process.
pub fn git_commit(config: &FolioConfig, body: &str) -> Result<Value, ApiError> {
    let request: CommitRequest = parse_body(body)?;

    let exe = std::env::current_exe()
        .context("Failed to locate the folio executable")
        .map_err(|e| ApiError::Internal(format!("Error running git commit: {e:#}")))?;

    run_commit(Cmd::new(exe), config, request.message)
}

/// Append the commit arguments to `cmd`, run it in the site root and relay
/// its exit status: stdout on success, stderr as a 500 otherwise.
fn run_commit(cmd: Cmd, config: &FolioConfig, message: Option<String>) -> Result<Value, ApiError> {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| config.commit.default_message.clone());

    let mut cmd = cmd.cwd(config.get_root());
    if let Some(path) = config.child_config() {
        cmd = cmd.arg("--config").arg(path);
    }
    let result = cmd
        .args(["commit", "-m", message.as_str()])
        .capture()
        .map_err(|e| ApiError::Internal(format!("Error running git commit: {e:#}")))?;

    if !result.success {
        return Err(ApiError::Internal(format!("Git commit failed: {}", result.stderr)));
    }

    Ok(json!({
        "success": true,
        "message": "Changes committed and pushed successfully",
        "output": result.stdout,
    }))
}
