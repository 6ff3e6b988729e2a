//! The page-info plugin.

use super::{AppEnv, PagePlugin, check_frontmatter, convert_frontmatter, inject_localized_date};
use crate::page::{Page, inject_page_info};

/// Plugin name as registered on the app.
pub const EXTENDS_PAGE_PLUGIN: &str = "pageinfo-extends-page";

/// Extend-page hook: legacy conversion, frontmatter check, classification
/// and localized date, in that order.
#[derive(Debug, Clone, Copy)]
pub struct ExtendsPagePlugin {
    /// Convert deprecated frontmatter keys first.
    pub legacy: bool,
    /// Check frontmatter field types before classification.
    pub check: bool,
}

impl Default for ExtendsPagePlugin {
    fn default() -> Self {
        Self {
            legacy: true,
            check: true,
        }
    }
}

impl ExtendsPagePlugin {
    pub const fn new(legacy: bool, check: bool) -> Self {
        Self { legacy, check }
    }
}

impl PagePlugin for ExtendsPagePlugin {
    fn name(&self) -> &str {
        EXTENDS_PAGE_PLUGIN
    }

    fn extends_page(&self, page: &mut Page, env: &AppEnv) {
        if self.legacy {
            let path = page.file_path_relative.clone().unwrap_or_default();
            convert_frontmatter(&mut page.frontmatter, &path);
        }
        if self.check {
            check_frontmatter(page, env.is_debug);
        }
        inject_page_info(page);
        inject_localized_date(page);
    }
}
