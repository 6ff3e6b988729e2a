//! Localized date injection.

use crate::page::Page;
use crate::utils::date::DateTime;

/// Set `data.localized_date` from `frontmatter.date`, formatted for the page
/// language.
///
/// Leaves an already-set localized date alone; unparseable dates are skipped.
pub fn inject_localized_date(page: &mut Page) {
    if page.data.localized_date.is_some() {
        return;
    }
    if let Some(date) = page.frontmatter.get_str("date").and_then(DateTime::parse) {
        page.data.localized_date = Some(date.to_localized(&page.lang));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Frontmatter;
    use serde_json::json;

    fn page(date: serde_json::Value, lang: &str) -> Page {
        let frontmatter: Frontmatter = serde_json::from_value(json!({ "date": date })).unwrap();
        Page::new("/a.html", Some("a.md".into()), frontmatter).with_lang(lang)
    }

    #[test]
    fn test_localized_by_lang() {
        let mut en = page(json!("2024-06-15"), "en-US");
        inject_localized_date(&mut en);
        assert_eq!(en.data.localized_date.as_deref(), Some("June 15, 2024"));

        let mut zh = page(json!("2024-06-15T08:00:00Z"), "zh-CN");
        inject_localized_date(&mut zh);
        assert_eq!(zh.data.localized_date.as_deref(), Some("2024年6月15日"));
    }

    #[test]
    fn test_existing_value_kept() {
        let mut page = page(json!("2024-06-15"), "en-US");
        page.data.localized_date = Some("custom".into());
        inject_localized_date(&mut page);
        assert_eq!(page.data.localized_date.as_deref(), Some("custom"));
    }

    #[test]
    fn test_missing_or_invalid_date() {
        let mut page = page(json!("soon"), "en-US");
        inject_localized_date(&mut page);
        assert!(page.data.localized_date.is_none());

        let mut page = Page::synthetic("/", "Home", "en-US");
        inject_localized_date(&mut page);
        assert!(page.data.localized_date.is_none());
    }
}
