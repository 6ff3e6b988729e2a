//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find the config file by searching upward from the current directory.
///
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/pageinfo.toml ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("pageinfo.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("pageinfo.toml")).unwrap();
        assert_eq!(found, dir.path().join("pageinfo.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_config_from(dir.path(), Path::new("no-such-config.toml")).is_none());
    }

    #[test]
    fn test_absolute_missing() {
        assert!(find_config_file(Path::new("/nonexistent/pageinfo.toml")).is_none());
    }
}
