//! Filesystem path helpers for content and config lookup.

use std::path::{Path, PathBuf};

/// Absolute form of `path`.
///
/// Canonicalizes when the path exists; otherwise joins a relative path onto
/// the current directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a CLI path argument.
///
/// Absolute paths are normalized. A relative path that exists from the current
/// directory wins; anything else is taken relative to `content_dir`, so both
/// `docs/guide/a.md` and `guide/a.md` work.
#[inline]
pub fn resolve_path(path: &Path, content_dir: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return normalize_path(path);
    }
    normalize_path(&content_dir.join(path))
}
