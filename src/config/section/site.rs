//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! lang = "zh-CN"    # Page language, used for localized dates
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Language tag applied to every page (e.g., "en-US", "zh-CN").
    pub lang: String,
}

impl SiteSectionConfig {
    pub const LANG: FieldPath = FieldPath::new("site.lang");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.lang.trim().is_empty() {
            diag.error_with_hint(Self::LANG, "language must not be empty", "e.g. lang = \"en-US\"");
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_site_lang() {
        let config = test_parse_config("[site]\nlang = \"zh-CN\"");
        assert_eq!(config.site.lang, "zh-CN");
    }

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.lang, "en-US");
    }

    #[test]
    fn test_empty_lang_rejected() {
        let config = test_parse_config("[site]\nlang = \" \"");
        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.lang");
    }
}
