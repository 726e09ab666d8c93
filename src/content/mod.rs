//! Content records read from the admin's JSON files.
//!
//! Records are flat: every field is optional and missing text renders as an
//! empty string. JSON keys are camelCase, unknown keys are ignored.
//!
//! | File                  | Type       | Consumer       |
//! |-----------------------|------------|----------------|
//! | CMS export            | `WorkData` | `folio render` |
//! | `website-config.json` | `SiteData` | `folio generate` |

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use std::{fs, path::Path};

/// Treat `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Accept technologies either as `"Rust, SQL"` or as `["Rust", "SQL"]`.
fn tech_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    let raw: Option<Raw> = Option::deserialize(deserializer)?;
    let items = match raw {
        None => Vec::new(),
        Some(Raw::Joined(s)) => s.split(',').map(str::to_string).collect(),
        Some(Raw::List(v)) => v,
    };
    Ok(items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

// ============================================================================
// Work page (render)
// ============================================================================

/// CMS export consumed by `folio render`.
///
/// Both top-level keys are optional; their presence decides whether the
/// work page is written at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkData {
    pub page_settings: Option<PageSettings>,
    pub work_entries: Option<Vec<WorkEntry>>,
}

impl WorkData {
    /// Whether the export carries anything for the work page.
    pub fn has_work_page(&self) -> bool {
        self.page_settings.is_some() || self.work_entries.is_some()
    }

    pub fn entries(&self) -> &[WorkEntry] {
        self.work_entries.as_deref().unwrap_or_default()
    }
}

/// Page-level heading. `None` falls back to the stock heading.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageSettings {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// One commit-style entry of the build log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub commit_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entry_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status_color: String,
}

impl Default for WorkEntry {
    fn default() -> Self {
        Self {
            commit_hash: String::new(),
            date: String::new(),
            entry_type: "feat".to_string(),
            title: String::new(),
            description: String::new(),
            tags: Vec::new(),
            status_color: "green".to_string(),
        }
    }
}

// ============================================================================
// Site config (generate)
// ============================================================================

/// `website-config.json` consumed by `folio generate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteData {
    #[serde(deserialize_with = "null_as_default")]
    pub profile: Profile,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: Contact,
    #[serde(deserialize_with = "null_as_default")]
    pub work: Vec<WorkItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
}

/// Contact handles. `linkedin` and `github` are full URLs, the rest are
/// handles or ids appended to the service's base URL.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub github: String,
    #[serde(deserialize_with = "null_as_default")]
    pub instagram: String,
    #[serde(deserialize_with = "null_as_default")]
    pub youtube: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scholar: String,
}

/// A job on the work page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkItem {
    pub commit_hash: Option<String>,
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "tech_list")]
    pub technologies: Vec<String>,
}

/// A project card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "tech_list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub live_url: String,
}

impl Project {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("completed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_entry_defaults() {
        let entry: WorkEntry = serde_json::from_str(r#"{"title":"a","date":"x"}"#).unwrap();
        assert_eq!(entry.title, "a");
        assert_eq!(entry.date, "x");
        assert_eq!(entry.entry_type, "feat");
        assert_eq!(entry.status_color, "green");
        assert!(entry.tags.is_empty());
        assert_eq!(entry.commit_hash, "");
    }

    #[test]
    fn test_work_entry_nulls() {
        let entry: WorkEntry =
            serde_json::from_str(r#"{"title":null,"tags":null,"unknownKey":1}"#).unwrap();
        assert_eq!(entry.title, "");
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_work_data_presence() {
        let empty: WorkData = serde_json::from_str("{}").unwrap();
        assert!(!empty.has_work_page());
        assert!(empty.entries().is_empty());

        let settings_only: WorkData =
            serde_json::from_str(r#"{"pageSettings":{"title":"Log"}}"#).unwrap();
        assert!(settings_only.has_work_page());

        let entries: WorkData =
            serde_json::from_str(r#"{"workEntries":[{"title":"one"},{"title":"two"}]}"#).unwrap();
        assert_eq!(entries.entries()[1].title, "two");
    }

    #[test]
    fn test_tech_list_forms() {
        let joined: Project =
            serde_json::from_str(r#"{"technologies":"Rust, SQL ,,Tokio"}"#).unwrap();
        assert_eq!(joined.technologies, vec!["Rust", "SQL", "Tokio"]);

        let list: Project = serde_json::from_str(r#"{"technologies":[" Rust ","SQL"]}"#).unwrap();
        assert_eq!(list.technologies, vec!["Rust", "SQL"]);

        let none: Project = serde_json::from_str(r#"{"technologies":null}"#).unwrap();
        assert!(none.technologies.is_empty());
        assert_eq!(none.status(), "completed");
    }

    #[test]
    fn test_site_data_sections() {
        let data: SiteData = serde_json::from_str(
            r#"{"profile":{"name":"Ada"},"contact":{"email":"ada@example.com"},"work":[{"company":"Acme"}]}"#,
        )
        .unwrap();
        assert_eq!(data.profile.name, "Ada");
        assert_eq!(data.contact.email, "ada@example.com");
        assert_eq!(data.work[0].company, "Acme");
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_load_json_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = load_json::<WorkData>(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.json"));
    }
}
