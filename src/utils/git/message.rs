//! Commit message selection and git output checks.

use std::path::Path;

/// Which page a change set is mostly about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Work,
    Projects,
    Publications,
    Photography,
    Other,
}

impl ChangeKind {
    /// Checked in this order, first hit wins.
    const PAGES: [(&'static str, ChangeKind); 4] = [
        ("work.html", ChangeKind::Work),
        ("projects.html", ChangeKind::Projects),
        ("publications.html", ChangeKind::Publications),
        ("photography.html", ChangeKind::Photography),
    ];

    /// Classify a list of changed paths as printed by `git diff --name-only`.
    pub fn classify<S: AsRef<str>>(files: &[S]) -> Self {
        Self::PAGES
            .iter()
            .find(|(page, _)| {
                files.iter().any(|f| {
                    Path::new(f.as_ref().trim())
                        .file_name()
                        .is_some_and(|name| name == *page)
                })
            })
            .map_or(Self::Other, |(_, kind)| *kind)
    }

    /// Commit message for this kind, stamped with `timestamp`.
    pub fn message(self, timestamp: &str) -> String {
        let subject = match self {
            Self::Work => "feat: update work log entries via CMS",
            Self::Projects => "feat: update projects via CMS",
            Self::Publications => "feat: update publications via CMS",
            Self::Photography => "feat: update photography via CMS",
            Self::Other => "chore: update content via CMS",
        };
        format!("{subject} ({timestamp})")
    }
}

/// Local time as used in generated commit messages.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

fn nothing_to_commit(stdout: &str, stderr: &str) -> bool {
    stdout.contains("nothing to commit") || stderr.contains("nothing to commit")
}

/// Outcome of `git commit`, judged from its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Committed,
    NothingToCommit,
    Failed,
}

pub fn commit_status(success: bool, stdout: &str, stderr: &str) -> CommitStatus {
    if nothing_to_commit(stdout, stderr) {
        CommitStatus::NothingToCommit
    } else if !success || !stderr.trim().is_empty() {
        CommitStatus::Failed
    } else {
        CommitStatus::Committed
    }
}

/// `git push` reports progress on stderr, so only an explicit error counts.
pub fn push_failed(success: bool, stderr: &str) -> bool {
    !success || stderr.to_ascii_lowercase().contains("error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_order() {
        assert_eq!(ChangeKind::classify(&["projects.html", "work.html"]), ChangeKind::Work);
        assert_eq!(
            ChangeKind::classify(&["photography.html", "publications.html"]),
            ChangeKind::Publications
        );
        assert_eq!(ChangeKind::classify(&["site/photography.html"]), ChangeKind::Photography);
        assert_eq!(ChangeKind::classify(&["index.html", "homework.html"]), ChangeKind::Other);
        assert_eq!(ChangeKind::classify::<&str>(&[]), ChangeKind::Other);
    }

    #[test]
    fn test_message_format() {
        assert_eq!(
            ChangeKind::Work.message("2025-01-02 09:30"),
            "feat: update work log entries via CMS (2025-01-02 09:30)"
        );
        assert_eq!(
            ChangeKind::Other.message("2025-01-02 09:30"),
            "chore: update content via CMS (2025-01-02 09:30)"
        );
        assert_eq!(timestamp().len(), "2025-01-02 09:30".len());
    }

    #[test]
    fn test_commit_status() {
        assert_eq!(commit_status(true, "[main abc] msg", ""), CommitStatus::Committed);
        assert_eq!(
            commit_status(false, "nothing to commit, working tree clean", ""),
            CommitStatus::NothingToCommit
        );
        assert_eq!(commit_status(true, "", "fatal: bad"), CommitStatus::Failed);
        assert_eq!(commit_status(false, "", ""), CommitStatus::Failed);
    }

    #[test]
    fn test_push_failed() {
        assert!(!push_failed(true, "To github.com:me/site.git\n   abc..def  main -> main"));
        assert!(push_failed(true, "error: failed to push some refs"));
        assert!(push_failed(false, ""));
    }
}
