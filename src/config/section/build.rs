//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "docs"    # Markdown sources, relative to pageinfo.toml
//! legacy = true       # Convert deprecated frontmatter keys
//! check = true        # Check frontmatter field types
//! debug = false       # Log full frontmatter of pages with problems
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Content and extend-page hook settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content directory (absolute after loading).
    pub content: PathBuf,
    pub legacy: bool,
    pub check: bool,
    pub debug: bool,
}

impl BuildSectionConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.content.exists() {
            diag.error_with_hint(
                Self::CONTENT,
                format!("content directory `{}` does not exist", self.content.display()),
                "create it, or point `content` at your Markdown sources",
            );
        } else if !self.content.is_dir() {
            diag.error(
                Self::CONTENT,
                format!("`{}` is not a directory", self.content.display()),
            );
        }
    }
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "docs".into(),
            legacy: true,
            check: true,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_build_config() {
        let config = test_parse_config("[build]\ncontent = \"src\"\nlegacy = false\ndebug = true");
        assert_eq!(config.build.content, PathBuf::from("src"));
        assert!(!config.build.legacy);
        assert!(config.build.check);
        assert!(config.build.debug);
    }

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("docs"));
        assert!(config.build.legacy);
        assert!(config.build.check);
        assert!(!config.build.debug);
    }

    #[test]
    fn test_missing_content_dir() {
        let mut config = test_parse_config("");
        config.build.content = PathBuf::from("/nonexistent/pageinfo/docs");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_content_is_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut config = test_parse_config("");
        config.build.content = file.path().to_path_buf();
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.errors()[0].message.contains("not a directory"));
    }
}
