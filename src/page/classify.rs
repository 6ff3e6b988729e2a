//! Page classification: frontmatter + source path → route meta.

use super::{ArticleInfoType, Frontmatter, Page, PageType};

/// Resolve the page type.
///
/// Priority: `home` > slide layout > article > page.
///
/// A page is an article when `article` is truthy, or when it comes from a
/// source file and `article` is not exactly `false`.
pub fn resolve_page_type(frontmatter: &Frontmatter, file_path_relative: Option<&str>) -> PageType {
    let is_article = frontmatter.is_truthy("article")
        || (!frontmatter.is_false("article") && file_path_relative.is_some_and(|p| !p.is_empty()));
    let is_slide = frontmatter.get_str("layout") == Some("Slide");

    if frontmatter.is_truthy("home") {
        PageType::Home
    } else if is_slide {
        PageType::Slide
    } else if is_article {
        PageType::Article
    } else {
        PageType::Page
    }
}

/// Write page type, title, icon, catalog and short title info into route meta.
///
/// Values are copied as-is; frontmatter is not validated here.
pub fn inject_page_info(page: &mut Page) {
    let kind = resolve_page_type(&page.frontmatter, page.file_path_relative.as_deref());
    let Page {
        title,
        file_path_relative,
        frontmatter,
        route_meta,
        data,
        ..
    } = page;

    route_meta.set(ArticleInfoType::Type, kind);

    // edit links read this even when it is None
    data.file_path_relative = file_path_relative.clone();

    route_meta.set(ArticleInfoType::Title, title.as_str());

    if let Some(icon) = frontmatter.get("icon") {
        route_meta.set(ArticleInfoType::Icon, icon.clone());
    }

    // catalog: `dir` wins over top-level fields
    if let Some(dir) = frontmatter.dir() {
        if let Some(order) = dir.get("order") {
            route_meta.set(ArticleInfoType::Order, order.clone());
        }
        if matches!(dir.get("index"), Some(serde_json::Value::Bool(false))) {
            route_meta.set(ArticleInfoType::Index, 0);
        }
    } else {
        if let Some(order) = frontmatter.get("order") {
            route_meta.set(ArticleInfoType::Order, order.clone());
        }
        if frontmatter.is_false("index") {
            route_meta.set(ArticleInfoType::Index, 0);
        }
    }

    if let Some(short_title) = frontmatter.get("shortTitle") {
        route_meta.set(ArticleInfoType::ShortTitle, short_title.clone());
    }
}
