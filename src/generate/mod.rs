//! Site generator.
//!
//! Reads `website-config.json` and refreshes the editable sections of the
//! hand-written pages in place:
//!
//! | Section  | Slots                                   | Pages               |
//! |----------|-----------------------------------------|---------------------|
//! | profile  | `profile-name` `profile-title` `profile-bio` | `[generate] pages` |
//! | contact  | `contact-email` ... `contact-scholar`   | `contact.html`      |
//! | work     | `work-items`                            | `work.html`         |
//! | projects | `projects`                              | `projects.html`     |
//!
//! A page missing a slot is left alone for that slot. Pages are only
//! rewritten when their content actually changes.

mod fragments;
mod splice;
mod watch;

pub use fragments::{contact_links, project, work_item};
pub use splice::{SpliceError, fill_slot, slot_names};
pub use watch::watch_config;

use crate::config::FolioConfig;
use crate::content::{SiteData, load_json};
use crate::utils::html::escape;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::{fs, path::Path};

const CONTACT_PAGE: &str = "contact.html";
const WORK_PAGE: &str = "work.html";
const PROJECTS_PAGE: &str = "projects.html";

/// Pages rewritten by one generator run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub updated: Vec<String>,
}

impl GenerateReport {
    fn record(&mut self, page: &str) {
        if !self.updated.iter().any(|p| p == page) {
            self.updated.push(page.to_string());
        }
    }

    pub fn summary(&self) -> String {
        if self.updated.is_empty() {
            "no pages changed".to_string()
        } else {
            format!("updated {}", self.updated.join(", "))
        }
    }
}

/// Load the site config and refresh every section.
pub fn generate_all(config: &FolioConfig) -> Result<GenerateReport> {
    let data: SiteData = load_json(&config.generate.config)?;
    let root = config.get_root();
    let mut report = GenerateReport::default();

    update_profile(root, &config.generate.pages, &data, &mut report)?;
    update_contact(root, &data, &mut report)?;
    generate_work(root, &data, &mut report)?;
    generate_projects(root, &data, &mut report)?;

    Ok(report)
}

/// Fill the profile slots of every listed page.
fn update_profile(
    root: &Path,
    pages: &[String],
    data: &SiteData,
    report: &mut GenerateReport,
) -> Result<()> {
    let profile = &data.profile;
    let name = escape(&profile.name);
    let title = escape(&profile.title);
    let slots = [
        ("profile-name", name.as_ref()),
        ("profile-title", title.as_ref()),
        ("profile-bio", profile.bio.as_str()),
    ];

    for page in pages {
        if patch_page(&root.join(page), &slots)? {
            report.record(page);
        }
    }
    Ok(())
}

fn update_contact(root: &Path, data: &SiteData, report: &mut GenerateReport) -> Result<()> {
    let links = contact_links(&data.contact);
    let slots: Vec<(&str, &str)> = links.iter().map(|(k, v)| (*k, v.as_str())).collect();

    if patch_page(&root.join(CONTACT_PAGE), &slots)? {
        report.record(CONTACT_PAGE);
    }
    Ok(())
}

/// Rebuild the job list. An empty `work` array keeps the current list.
fn generate_work(root: &Path, data: &SiteData, report: &mut GenerateReport) -> Result<()> {
    if data.work.is_empty() {
        debug!("generate"; "no work items, keeping {}", WORK_PAGE);
        return Ok(());
    }

    let today = chrono::Local::now().format("%b %d, %Y").to_string();
    let items: String = data.work.iter().map(|item| work_item(item, &today)).collect();

    if patch_page(&root.join(WORK_PAGE), &[("work-items", items.as_str())])? {
        report.record(WORK_PAGE);
    }
    Ok(())
}

/// Rebuild the project cards. An empty `projects` array keeps the current cards.
fn generate_projects(root: &Path, data: &SiteData, report: &mut GenerateReport) -> Result<()> {
    if data.projects.is_empty() {
        debug!("generate"; "no projects, keeping {}", PROJECTS_PAGE);
        return Ok(());
    }

    let cards: String = data.projects.iter().map(project).collect();

    if patch_page(&root.join(PROJECTS_PAGE), &[("projects", cards.as_str())])? {
        report.record(PROJECTS_PAGE);
    }
    Ok(())
}

/// Fill `slots` in the page at `path`.
///
/// Returns whether the file was rewritten. A page that does not exist, or
/// lacks a slot, is skipped with a debug message.
pub fn patch_page(path: &Path, slots: &[(&str, &str)]) -> Result<bool> {
    if !path.is_file() {
        debug!("generate"; "{} not found, skipping", path.display());
        return Ok(false);
    }

    let original =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let mut html = original.clone();
    for (name, body) in slots {
        match fill_slot(&html, name, body) {
            Ok(filled) => html = filled,
            Err(SpliceError::Missing(_)) => {
                debug!(
                    "generate";
                    "slot `{}` not in {} (has: {})",
                    name,
                    path.display(),
                    slot_names(&html).join(", ")
                );
            }
            Err(err @ SpliceError::Unclosed(_)) => {
                log!("warning"; "{} in {}", err, path.display());
            }
        }
    }

    if html == original {
        return Ok(false);
    }

    fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    const SITE_JSON: &str = r#"{
        "profile": {"name": "Ada Lovelace", "title": "Engineer", "bio": "Writes <em>notes</em>."},
        "contact": {"email": "ada@example.com", "github": "https://github.com/ada"},
        "work": [
            {"commitHash": "f00d", "date": "Jan 2024", "position": "Analyst", "company": "Engine Co",
             "technologies": "Rust, SQL"}
        ],
        "projects": [
            {"name": "Notes", "status": "planned", "technologies": ["Rust"]}
        ]
    }"#;

    fn site(dir: &TempDir) -> FolioConfig {
        fs::write(dir.path().join("website-config.json"), SITE_JSON).unwrap();
        fs::write(
            dir.path().join("index.html"),
            "<h1><!-- slot:profile-name -->Old<!-- /slot:profile-name --></h1>\
             <p><!-- slot:profile-bio -->Old bio<!-- /slot:profile-bio --></p>",
        )
        .unwrap();
        fs::write(
            dir.path().join("contact.html"),
            "<li><!-- slot:contact-email --><!-- /slot:contact-email --></li>\
             <li><!-- slot:contact-youtube -->stale<!-- /slot:contact-youtube --></li>",
        )
        .unwrap();
        fs::write(
            dir.path().join("work.html"),
            "<title><!-- slot:profile-name -->Old<!-- /slot:profile-name --></title>\
             <div><!-- slot:work-items --><!-- /slot:work-items --></div>",
        )
        .unwrap();
        fs::write(
            dir.path().join("projects.html"),
            "<div><!-- slot:projects -->old cards<!-- /slot:projects --></div>",
        )
        .unwrap();
        test_config_at(dir.path())
    }

    #[test]
    fn test_generate_all_fills_sections() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        let report = generate_all(&config).unwrap();
        assert!(report.updated.contains(&"index.html".to_string()));
        assert!(report.updated.contains(&"contact.html".to_string()));

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.contains("<!-- slot:profile-name -->Ada Lovelace<!-- /slot:profile-name -->"));
        assert!(index.contains("Writes <em>notes</em>."));

        let contact = fs::read_to_string(dir.path().join("contact.html")).unwrap();
        assert!(contact.contains("mailto:ada@example.com"));
        assert!(contact.contains("<!-- slot:contact-youtube --><!-- /slot:contact-youtube -->"));

        let work = fs::read_to_string(dir.path().join("work.html")).unwrap();
        assert!(work.contains("feat: Analyst at Engine Co"));
        assert!(work.contains(">SQL</span>"));

        let projects = fs::read_to_string(dir.path().join("projects.html")).unwrap();
        assert!(projects.contains("Planned"));
        assert!(!projects.contains("old cards"));
    }

    #[test]
    fn test_generate_twice_is_stable() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        generate_all(&config).unwrap();
        let first = fs::read_to_string(dir.path().join("projects.html")).unwrap();
        let report = generate_all(&config).unwrap();
        let second = fs::read_to_string(dir.path().join("projects.html")).unwrap();

        assert_eq!(first, second);
        assert!(report.updated.is_empty());
        assert_eq!(report.summary(), "no pages changed");
    }

    #[test]
    fn test_empty_work_keeps_page() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::write(config.generate.config.clone(), r#"{"work": [], "projects": []}"#).unwrap();

        generate_all(&config).unwrap();
        let projects = fs::read_to_string(dir.path().join("projects.html")).unwrap();
        assert!(projects.contains("old cards"));
    }

    #[test]
    fn test_patch_page_missing_file_and_slot() {
        let dir = TempDir::new().unwrap();
        assert!(!patch_page(&dir.path().join("nope.html"), &[("a", "b")]).unwrap());

        let page = dir.path().join("plain.html");
        fs::write(&page, "<p>no slots</p>").unwrap();
        assert!(!patch_page(&page, &[("profile-name", "x")]).unwrap());
        assert_eq!(fs::read_to_string(&page).unwrap(), "<p>no slots</p>");
    }

    #[test]
    fn test_missing_site_config() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path());
        let err = generate_all(&config).unwrap_err();
        assert!(format!("{err}").contains("website-config.json"));
    }
}
