use gix::Repository;
use std::path::{Path, PathBuf};

/// Find the repository containing `dir`.
pub fn discover(dir: &Path) -> Option<Repository> {
    gix::discover(dir).ok()
}

/// Working tree root, `None` for a bare repository.
///
/// Linked worktrees and submodules keep their git dir elsewhere, so this is
/// not simply the parent of `.git`.
pub fn repo_root(repo: &Repository) -> Option<PathBuf> {
    repo.workdir().map(Path::to_path_buf)
}

/// Short name of the branch HEAD points at, if any.
///
/// An unborn branch still has a name; a detached HEAD has none.
pub fn current_branch(repo: &Repository) -> Option<String> {
    repo.head_name()
        .ok()
        .flatten()
        .map(|name| name.shorten().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_outside_repo() {
        let dir = TempDir::new().unwrap();
        assert!(discover(dir.path()).is_none());
    }

    #[test]
    fn test_bare_repo_has_no_root() {
        let dir = TempDir::new().unwrap();
        crate::exec!(dir.path(); "git"; "init", "-q", "--bare").unwrap();

        let repo = discover(dir.path()).unwrap();
        assert!(repo_root(&repo).is_none());
    }

    #[test]
    fn test_unborn_branch_name() {
        let dir = TempDir::new().unwrap();
        crate::exec!(dir.path(); "git"; "init", "-q", "-b", "trunk").unwrap();

        let repo = discover(dir.path()).unwrap();
        assert_eq!(current_branch(&repo).as_deref(), Some("trunk"));
        assert_eq!(
            repo_root(&repo).unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}
