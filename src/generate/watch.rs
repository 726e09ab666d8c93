//! `generate --watch`: regenerate whenever the site config changes.
//!
//! ```text
//! notify → WatchMsg::Fs ─┐
//!                        ├→ debounce → generate_all → status line
//! Ctrl+C → WatchMsg::Stop┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{EventKind, RecursiveMode, Watcher};

use super::generate_all;
use crate::config::FolioConfig;
use crate::logger::{status_error, status_success};
use crate::{debug, log};

/// Quiet period before a burst of editor writes triggers a run.
const DEBOUNCE_MS: u64 = 300;

enum WatchMsg {
    Fs(notify::Result<notify::Event>),
    Stop,
}

/// Whether `event` touches the watched file with a content change.
fn is_relevant(event: &notify::Event, target: &Path) -> bool {
    let kind_matches = match event.kind {
        EventKind::Create(_) | EventKind::Remove(_) => true,
        EventKind::Modify(modify) => !matches!(modify, notify::event::ModifyKind::Metadata(_)),
        _ => false,
    };
    kind_matches && event.paths.iter().any(|p| p.file_name() == target.file_name())
}

/// Generate once, then keep regenerating until Ctrl+C.
pub fn watch_config(config: &FolioConfig) -> Result<()> {
    let target: PathBuf = config.generate.config.clone();
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(config.get_root())
        .to_path_buf();

    let (tx, rx) = mpsc::channel();

    // Watcher first, so edits made during the initial run are not lost
    let fs_tx = tx.clone();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = fs_tx.send(WatchMsg::Fs(res));
    })
    .context("Failed to create file watcher")?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    ctrlc::set_handler(move || {
        let _ = tx.send(WatchMsg::Stop);
    })
    .context("Failed to set Ctrl+C handler")?;

    log!("watch"; "watching {} (Ctrl+C to stop)", target.display());
    run_once(config);

    let debounce = Duration::from_millis(DEBOUNCE_MS);
    let mut pending: Option<Instant> = None;

    loop {
        let timeout = pending.map_or(Duration::from_secs(3600), |since| {
            debounce.saturating_sub(since.elapsed())
        });

        match rx.recv_timeout(timeout) {
            Ok(WatchMsg::Stop) => break,
            Ok(WatchMsg::Fs(Ok(event))) => {
                debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
                if is_relevant(&event, &target) {
                    pending = Some(Instant::now());
                }
            }
            Ok(WatchMsg::Fs(Err(e))) => log!("watch"; "notify error: {}", e),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                if pending.take().is_some() {
                    run_once(config);
                }
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    log!("watch"; "stopped");
    Ok(())
}

fn run_once(config: &FolioConfig) {
    match generate_all(config) {
        Ok(report) => status_success(&report.summary()),
        Err(e) => status_error("generate failed", &format!("{e:#}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, MetadataKind, ModifyKind};

    fn event(kind: EventKind, path: &str) -> notify::Event {
        notify::Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_relevant_events() {
        let target = Path::new("/site/website-config.json");

        assert!(is_relevant(
            &event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), "/site/website-config.json"),
            target
        ));
        assert!(is_relevant(
            &event(EventKind::Create(CreateKind::File), "/site/website-config.json"),
            target
        ));
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Metadata(MetadataKind::Any)), "/site/website-config.json"),
            target
        ));
        assert!(!is_relevant(
            &event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), "/site/index.html"),
            target
        ));
    }
}
