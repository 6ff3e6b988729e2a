//! Page entity passed through the extend-page hook.

use serde::Serialize;

use super::{Frontmatter, RouteMeta};

/// One output document.
///
/// Built by the loader before any hook runs; hooks mutate it in place.
///
/// # Example
///
/// ```text
/// Source: docs/guide/intro.md
///
/// Page {
///     path:               /guide/intro.html
///     title:              Introduction
///     file_path_relative: Some("guide/intro.md")
///     route_meta:         { y: "a", t: "Introduction" }
///     data:               { filePathRelative: "guide/intro.md" }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Route path (e.g., `/guide/intro.html`)
    pub path: String,
    pub title: String,
    pub lang: String,
    /// Source path relative to the content root, `None` for synthesized pages
    pub file_path_relative: Option<String>,
    pub frontmatter: Frontmatter,
    pub route_meta: RouteMeta,
    pub data: PageData,
}

/// Page data exposed to the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    /// Mirrors [`Page::file_path_relative`] (edit links). Serialized as `null`
    /// when the page has no source file.
    pub file_path_relative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localized_date: Option<String>,
}

impl Page {
    pub fn new(
        path: impl Into<String>,
        file_path_relative: Option<String>,
        frontmatter: Frontmatter,
    ) -> Self {
        Self {
            path: path.into(),
            file_path_relative,
            frontmatter,
            ..Default::default()
        }
    }

    /// A page with no source file (e.g., generated index pages).
    pub fn synthetic(path: impl Into<String>, title: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            lang: lang.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Source path for log messages.
    pub fn display_path(&self) -> &str {
        self.file_path_relative.as_deref().unwrap_or(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_page_has_no_source() {
        let page = Page::synthetic("/tags/", "Tags", "en-US");
        assert!(page.file_path_relative.is_none());
        assert_eq!(page.display_path(), "/tags/");
    }

    #[test]
    fn test_page_data_serializes_null_path() {
        let json = serde_json::to_value(PageData::default()).unwrap();
        assert_eq!(json, serde_json::json!({ "filePathRelative": null }));
    }
}
