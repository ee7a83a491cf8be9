//! Filesystem helpers for resolving and probing manifest references.
//!
//! Resolution is a pure function of the root and the referenced path so
//! that callers can point it at any directory, temporary ones included.

use std::path::{Path, PathBuf};

/// What a resolved path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Nothing exists at the path.
    Missing,
    /// A regular file (symlinks followed).
    File,
    /// A directory (symlinks followed).
    Dir,
    /// Something else, e.g. a socket or a FIFO.
    Other,
}

/// Probe the filesystem for `path`, following symlinks.
#[must_use]
pub fn path_kind(path: &Path) -> PathKind {
    match path.metadata() {
        Ok(m) if m.is_file() => PathKind::File,
        Ok(m) if m.is_dir() => PathKind::Dir,
        Ok(_) => PathKind::Other,
        Err(_) => PathKind::Missing,
    }
}

/// Repository root for a manifest: the manifest file's grandparent.
///
/// `repo/.claude-plugin/marketplace.json` resolves to `repo`. Paths with too
/// few components fall back to `.`.
#[must_use]
pub fn repo_root_for(manifest: &Path) -> PathBuf {
    match manifest.parent().and_then(Path::parent) {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Join a manifest-relative reference onto `root`.
///
/// Leading `./` prefixes and `/` separators are stripped first, so a
/// reference can never escape to an absolute location.
#[must_use]
pub fn resolve_reference(root: &Path, reference: &str) -> PathBuf {
    let mut rel = reference;
    loop {
        let stripped = rel.trim_start_matches("./").trim_start_matches('/');
        if stripped.len() == rel.len() {
            break;
        }
        rel = stripped;
    }
    root.join(rel)
}

/// Absolute form of `path` for display; falls back to `path` unchanged.
#[must_use]
pub(crate) fn display_absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn path_kind_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.md");
        fs::write(&file, "x").unwrap();
        assert_eq!(path_kind(&file), PathKind::File);
    }

    #[test]
    fn path_kind_dir() {
        let dir = tempdir().unwrap();
        assert_eq!(path_kind(dir.path()), PathKind::Dir);
    }

    #[test]
    fn path_kind_missing() {
        assert_eq!(
            path_kind(Path::new("/nonexistent/path/file.txt")),
            PathKind::Missing
        );
    }

    #[cfg(unix)]
    #[test]
    fn path_kind_follows_symlink_to_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.md");
        fs::write(&target, "x").unwrap();
        let link = dir.path().join("link.md");
        std::os::unix::fs::symlink(&target, &link).unwrap();
        assert_eq!(path_kind(&link), PathKind::File);
    }

    #[test]
    fn repo_root_is_grandparent() {
        let root = repo_root_for(Path::new("/repo/.claude-plugin/marketplace.json"));
        assert_eq!(root, PathBuf::from("/repo"));
    }

    #[test]
    fn repo_root_of_relative_manifest() {
        let root = repo_root_for(Path::new("repo/.claude-plugin/marketplace.json"));
        assert_eq!(root, PathBuf::from("repo"));
    }

    #[test]
    fn repo_root_falls_back_to_cwd() {
        assert_eq!(
            repo_root_for(Path::new("marketplace.json")),
            PathBuf::from(".")
        );
        assert_eq!(
            repo_root_for(Path::new(".claude-plugin/marketplace.json")),
            PathBuf::from(".")
        );
    }

    #[test]
    fn resolve_strips_dot_slash() {
        let p = resolve_reference(Path::new("/repo"), "./agents/a.md");
        assert_eq!(p, PathBuf::from("/repo/agents/a.md"));
    }

    #[test]
    fn resolve_plain_relative() {
        let p = resolve_reference(Path::new("/repo"), "skills/foo");
        assert_eq!(p, PathBuf::from("/repo/skills/foo"));
    }

    #[test]
    fn resolve_strips_leading_slash() {
        let p = resolve_reference(Path::new("/repo"), "/etc/passwd");
        assert_eq!(p, PathBuf::from("/repo/etc/passwd"));
    }

    #[test]
    fn resolve_strips_repeated_prefixes() {
        let p = resolve_reference(Path::new("/repo"), "././/x.json");
        assert_eq!(p, PathBuf::from("/repo/x.json"));
    }

    #[test]
    fn resolve_keeps_hidden_names() {
        let p = resolve_reference(Path::new("/repo"), ".mcp.json");
        assert_eq!(p, PathBuf::from("/repo/.mcp.json"));
    }
}
