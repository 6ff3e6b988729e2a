//! Classify command implementation.
//!
//! Loads Markdown pages, runs the extend-page hook over them in parallel and
//! writes their route metadata as JSON.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value as JsonValue};

use crate::cli::ClassifyArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::page::{Page, PageType};
use crate::utils::plural_count;

use super::common::{build_app, collect_content_files, describe_failure, load_pages};

/// Execute classify command
pub fn run_classify(args: &ClassifyArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_content_files(&args.paths, config.content_dir())?;
    log!("classify"; "loading {}", plural_count(files.len(), "file"));

    let (mut pages, failures) = load_pages(&files, config);
    for failure in failures {
        log!("warning"; "skipping {}", describe_failure(failure));
    }
    let app = build_app(config);
    app.extend_pages(&mut pages);

    log!("classify"; "{}", summarize(&pages));

    let output = JsonValue::Array(pages.iter().map(|p| format_page(p, args.named)).collect());
    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", formatted)?;
        log!("classify"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

/// One output record, path first.
fn format_page(page: &Page, named: bool) -> JsonValue {
    let mut obj = Map::new();
    obj.insert("path".to_string(), JsonValue::String(page.path.clone()));
    obj.insert(
        "filePathRelative".to_string(),
        page.file_path_relative.clone().map_or(JsonValue::Null, JsonValue::String),
    );
    obj.insert("title".to_string(), JsonValue::String(page.title.clone()));

    let route_meta = if named {
        let mut named = page.route_meta.to_named();
        // readable type name instead of its code
        if let Some(kind) = page.route_meta.page_type() {
            named.insert("type".to_string(), JsonValue::String(kind.name().to_string()));
        }
        JsonValue::Object(named)
    } else {
        JsonValue::Object(page.route_meta.as_map().clone())
    };
    obj.insert("routeMeta".to_string(), route_meta);
    obj.insert(
        "data".to_string(),
        serde_json::to_value(&page.data).unwrap_or_default(),
    );

    JsonValue::Object(obj)
}

/// `"12 pages: 1 home, 9 articles, 2 pages"`
fn summarize(pages: &[Page]) -> String {
    let count = |kind: PageType| {
        pages
            .iter()
            .filter(|p| p.route_meta.page_type() == Some(kind))
            .count()
    };

    let parts: Vec<String> = [PageType::Home, PageType::Slide, PageType::Article, PageType::Page]
        .into_iter()
        .map(|kind| (kind, count(kind)))
        .filter(|(_, n)| *n > 0)
        .map(|(kind, n)| plural_count(n, kind.name()))
        .collect();

    if parts.is_empty() {
        plural_count(pages.len(), "page")
    } else {
        format!("{}: {}", plural_count(pages.len(), "page"), parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{ArticleInfoType, Frontmatter, inject_page_info};
    use serde_json::json;

    fn classified(path: Option<&str>, frontmatter: JsonValue) -> Page {
        let frontmatter: Frontmatter = serde_json::from_value(frontmatter).unwrap();
        let mut page = Page::new("/x.html", path.map(str::to_string), frontmatter).with_title("X");
        inject_page_info(&mut page);
        page
    }

    #[test]
    fn test_format_page_compact() {
        let page = classified(Some("x.md"), json!({ "icon": "book" }));
        let value = format_page(&page, false);

        assert_eq!(
            value,
            json!({
                "path": "/x.html",
                "filePathRelative": "x.md",
                "title": "X",
                "routeMeta": { "y": "a", "t": "X", "i": "book" },
                "data": { "filePathRelative": "x.md" },
            })
        );
    }

    #[test]
    fn test_format_page_named() {
        let page = classified(None, json!({ "index": false }));
        let value = format_page(&page, true);

        assert_eq!(value["filePathRelative"], JsonValue::Null);
        assert_eq!(value["routeMeta"], json!({ "type": "page", "title": "X", "index": 0 }));
        assert_eq!(value["data"], json!({ "filePathRelative": null }));
        assert!(page.route_meta.contains(ArticleInfoType::Index));
    }

    #[test]
    fn test_summarize() {
        let pages = vec![
            classified(Some("README.md"), json!({ "home": true })),
            classified(Some("a.md"), json!({})),
            classified(Some("b.md"), json!({})),
        ];
        assert_eq!(summarize(&pages), "3 pages: 1 home, 2 articles");
        assert_eq!(summarize(&[]), "0 pages");
    }

    #[test]
    fn test_run_classify_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "---\nhome: true\ntitle: Home\n---\n").unwrap();
        std::fs::write(dir.path().join("a.md"), "---\ndir:\n  order: 3\n---\n# A\n").unwrap();

        let mut config = crate::config::test_parse_config("");
        config.build.content = dir.path().to_path_buf();
        let out = dir.path().join("out.json");
        let args = ClassifyArgs {
            paths: Vec::new(),
            pretty: false,
            output: Some(out.clone()),
            named: true,
            legacy: None,
            check: None,
            debug: false,
            verbose: false,
        };

        run_classify(&args, &config).unwrap();

        let written: JsonValue =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written[0]["path"], json!("/"));
        assert_eq!(written[0]["routeMeta"]["type"], json!("home"));
        assert_eq!(written[1]["path"], json!("/a.html"));
        assert_eq!(written[1]["title"], json!("A"));
        assert_eq!(written[1]["routeMeta"]["order"], json!(3));
    }
}
