//! URL to filesystem path resolution.

use std::path::{Path, PathBuf};

/// Resolve a request URL to a file under `root`.
///
/// `/` maps to `index`; a directory maps to its `index.html`. Anything that
/// does not exist or escapes `root` (through `..` or a symlink) is `None`.
pub fn resolve_path(url: &str, root: &Path, index: &str) -> Option<PathBuf> {
    let clean = normalize_url(url)?;
    let clean = if clean.is_empty() { index } else { clean.as_str() };

    // Reject paths with suspicious patterns early
    if clean.split(['/', '\\']).any(|part| part == "..") {
        return None;
    }

    // Canonicalize to resolve symlinks and verify path is under root
    let canonical = root.join(clean).canonicalize().ok()?;
    let root_canonical = root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Strip the query string, decode, trim slashes. `None` for non-UTF-8 paths.
fn normalize_url(url: &str) -> Option<String> {
    use percent_encoding::percent_decode_str;

    let path = url.split(['?', '#']).next().unwrap_or(url);
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    Some(decoded.trim_matches('/').to_string())
}
