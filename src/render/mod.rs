//! Work page renderer.
//!
//! Turns a CMS export (`WorkData`) into a complete `work.html` by filling the
//! embedded skeleton. Entries are concatenated in input order and rendering is
//! a pure function of the input, so the same export always produces the same
//! bytes.
//!
//! Titles and descriptions are admin-authored markup and are inserted as-is;
//! short labels (hash, date, type, tags) and class names are escaped.

mod tags;

pub use tags::{status_color, status_label, tag_class, tech_color};

use crate::config::FolioConfig;
use crate::content::{WorkData, WorkEntry, load_json};
use crate::embed::work::{WORK_HTML, WorkPageVars};
use crate::log;
use crate::utils::html::{escape, escape_attr};
use anyhow::{Context, Result};
use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

/// Heading used when the export has no page title.
pub const DEFAULT_TITLE: &str = "Build Log";

/// Intro used when the export has no page description.
pub const DEFAULT_DESCRIPTION: &str = "My day job is confidential, so here's what I'm actually \
excited to share: the random projects I build because they seem fun, experiments that went \
nowhere, and side quests that turned into something cool.";

/// Render the tag `<span>`s of one entry. Empty for an untagged entry.
pub fn render_tags(tags: &[String]) -> String {
    tags.iter().fold(String::new(), |mut html, tag| {
        let _ = write!(
            html,
            r#"<span class="px-2 py-1 {} text-xs rounded">{}</span>"#,
            tag_class(tag),
            escape(tag)
        );
        html
    })
}

/// Render a single commit-style entry.
pub fn render_entry(entry: &WorkEntry) -> String {
    format!(
        r#"
                            <div class="border-l-2 border-gray-200 pl-6 pb-6">
                                <div class="flex items-center gap-3 mb-3">
                                    <div class="w-2 h-2 bg-{color}-500 rounded-full -ml-7 border-2 border-white"></div>
                                    <span class="font-mono text-sm text-gray-500">{hash}</span>
                                    <span class="text-sm text-gray-500">•</span>
                                    <span class="text-sm text-gray-500">{date}</span>
                                </div>
                                <h3 class="font-medium text-gray-900 mb-2">{kind}: {title}</h3>
                                <p class="text-gray-700 text-sm mb-3">
                                    {description}
                                </p>
                                <div class="flex gap-2">
                                    {tags}
                                </div>
                            </div>"#,
        color = escape_attr(&entry.status_color),
        hash = escape(&entry.commit_hash),
        date = escape(&entry.date),
        kind = escape(&entry.entry_type),
        title = entry.title,
        description = entry.description,
        tags = render_tags(&entry.tags),
    )
}

/// Render the complete work page.
pub fn render_work_page(data: &WorkData) -> String {
    let settings = data.page_settings.as_ref();
    let title = settings
        .and_then(|s| s.title.as_deref())
        .unwrap_or(DEFAULT_TITLE);
    let description = settings
        .and_then(|s| s.description.as_deref())
        .unwrap_or(DEFAULT_DESCRIPTION);

    let entries: String = data.entries().iter().map(render_entry).collect();

    WORK_HTML.render(&WorkPageVars {
        title,
        description,
        entries: &entries,
    })
}

/// Render the work page from `json_file` into the site root.
///
/// Returns the written path, or `None` when the export has neither
/// `workEntries` nor `pageSettings`.
pub fn update_from_json(json_file: &Path, config: &FolioConfig) -> Result<Option<PathBuf>> {
    let data: WorkData = load_json(json_file)?;
    if !data.has_work_page() {
        log!("render"; "{} has no work page data, nothing to do", json_file.display());
        return Ok(None);
    }

    let output = config.root_join(&config.render.output);
    fs::write(&output, render_work_page(&data))
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log!("render"; "updated {}", output.display());
    Ok(Some(output))
}

/// Copy the configured pages into `backup_<YYYYmmdd_HHMMSS>/` under the root.
///
/// Pages that do not exist are skipped. Returns the backup directory.
pub fn backup_current_files(config: &FolioConfig) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    backup_into(config.get_root(), &config.render.backup, &stamp)
}

fn backup_into(root: &Path, files: &[String], stamp: &str) -> Result<PathBuf> {
    let backup_dir = root.join(format!("backup_{stamp}"));
    fs::create_dir_all(&backup_dir)
        .with_context(|| format!("Failed to create {}", backup_dir.display()))?;

    for file in files {
        let src = root.join(file);
        if !src.is_file() {
            continue;
        }
        let dst = backup_dir.join(file);
        fs::copy(&src, &dst).with_context(|| format!("Failed to back up {}", src.display()))?;
        log!("render"; "backed up {} to {}", file, backup_dir.display());
    }

    Ok(backup_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    fn entry(json: &str) -> WorkEntry {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_entry_has_fields_and_no_tags() {
        let html = render_entry(&entry(r#"{"title":"a","date":"x"}"#));
        assert!(html.contains("feat: a"));
        assert!(html.contains(">x</span>"));
        assert!(html.contains("bg-green-500"));
        assert!(!html.contains("px-2 py-1"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let e = entry(r#"{"title":"Ship it","date":"Jan 1","tags":["Rust","Mystery"]}"#);
        assert_eq!(render_entry(&e), render_entry(&e));

        let data: WorkData =
            serde_json::from_str(r#"{"workEntries":[{"title":"one"},{"title":"two"}]}"#).unwrap();
        assert_eq!(render_work_page(&data), render_work_page(&data));
    }

    #[test]
    fn test_tags_use_color_map() {
        let html = render_tags(&["Rust".to_string(), "Mystery".to_string()]);
        assert_eq!(
            html,
            "<span class=\"px-2 py-1 bg-orange-100 text-orange-700 text-xs rounded\">Rust</span>\
             <span class=\"px-2 py-1 bg-gray-100 text-gray-700 text-xs rounded\">Mystery</span>"
        );
        assert_eq!(render_tags(&[]), "");
    }

    #[test]
    fn test_page_defaults_and_order() {
        let data: WorkData =
            serde_json::from_str(r#"{"workEntries":[{"title":"first"},{"title":"second"}]}"#)
                .unwrap();
        let html = render_work_page(&data);

        assert!(html.contains("<title>Build Log</title>"));
        assert!(html.contains(DEFAULT_DESCRIPTION));
        let first = html.find("feat: first").unwrap();
        let second = html.find("feat: second").unwrap();
        assert!(first < second);
        assert!(!html.contains("__ENTRIES__"));
    }

    #[test]
    fn test_page_settings_override() {
        let data: WorkData = serde_json::from_str(
            r#"{"pageSettings":{"title":"Side Quests","description":""},"workEntries":[]}"#,
        )
        .unwrap();
        let html = render_work_page(&data);
        assert!(html.contains("<title>Side Quests</title>"));
        assert!(!html.contains(DEFAULT_DESCRIPTION));
    }

    #[test]
    fn test_update_from_json_writes_output() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let json = dir.path().join("cms-data.json");
        fs::write(&json, r#"{"workEntries":[{"title":"a","date":"x","entryType":"fix"}]}"#)
            .unwrap();

        let written = update_from_json(&json, &config).unwrap().unwrap();
        assert_eq!(written, dir.path().join("work.html"));
        let html = fs::read_to_string(written).unwrap();
        assert!(html.contains("fix: a"));
    }

    #[test]
    fn test_update_from_json_without_work_data() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let json = dir.path().join("other.json");
        fs::write(&json, r#"{"projects":[]}"#).unwrap();

        assert!(update_from_json(&json, &config).unwrap().is_none());
        assert!(!dir.path().join("work.html").exists());
    }

    #[test]
    fn test_update_from_json_malformed() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let json = dir.path().join("bad.json");
        fs::write(&json, "{").unwrap();
        assert!(update_from_json(&json, &config).is_err());
    }

    #[test]
    fn test_backup_copies_existing_pages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("work.html"), "old work").unwrap();
        let files = vec!["work.html".to_string(), "projects.html".to_string()];

        let backup = backup_into(dir.path(), &files, "20250101_120000").unwrap();
        assert_eq!(backup, dir.path().join("backup_20250101_120000"));
        assert_eq!(fs::read_to_string(backup.join("work.html")).unwrap(), "old work");
        assert!(!backup.join("projects.html").exists());
    }
}
