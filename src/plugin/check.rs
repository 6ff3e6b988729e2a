//! Frontmatter type checking.
//!
//! Runs before classification. Ill-typed fields are reported and removed so
//! later hooks only see values of the expected shape.

use std::fmt;

use owo_colors::OwoColorize;
use serde_json::Value as JsonValue;

use crate::page::{JsonMap, Page};
use crate::utils::date::DateTime;
use crate::log;

/// Expected shape of a frontmatter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    String,
    Bool,
    Number,
    Mapping,
    Date,
    /// A string (converted to a one-element list) or a list of strings.
    StringList,
}

impl Expect {
    const fn describe(self) -> &'static str {
        match self {
            Self::String => "a string",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::Mapping => "a mapping",
            Self::Date => "a date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)",
            Self::StringList => "a string or a list of strings",
        }
    }
}

const RULES: &[(&str, Expect)] = &[
    ("title", Expect::String),
    ("shortTitle", Expect::String),
    ("icon", Expect::String),
    ("layout", Expect::String),
    ("containerClass", Expect::String),
    ("home", Expect::Bool),
    ("article", Expect::Bool),
    ("index", Expect::Bool),
    ("order", Expect::Number),
    ("dir", Expect::Mapping),
    ("date", Expect::Date),
    ("tag", Expect::StringList),
    ("category", Expect::StringList),
];

const DIR_RULES: &[(&str, Expect)] = &[("order", Expect::Number), ("index", Expect::Bool)];

/// A single frontmatter problem.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterDiagnostic {
    /// Page source path (or route path for synthesized pages)
    pub page: String,
    /// Field path (e.g., `dir.order`)
    pub field: String,
    pub message: String,
}

impl fmt::Display for FrontmatterDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{} {} {}",
            "[".dimmed(),
            self.field.cyan(),
            "]".dimmed(),
            "→".red(),
            self.message
        )
    }
}

/// Check field types, remove invalid fields and normalize string lists.
///
/// Problems are logged as they are found; with `is_debug` the full
/// frontmatter of an affected page is logged too.
pub fn check_frontmatter(page: &mut Page, is_debug: bool) -> Vec<FrontmatterDiagnostic> {
    let location = page.display_path().to_string();
    let mut diagnostics = Vec::new();
    let mut report = |field: String, expect: Expect, value: &JsonValue| {
        diagnostics.push(FrontmatterDiagnostic {
            page: location.clone(),
            field,
            message: format!("expected {}, found {}", expect.describe(), kind_of(value)),
        });
    };

    let mut normalized: Vec<(&str, JsonValue)> = Vec::new();
    let mut invalid: Vec<&str> = Vec::new();

    for (key, expect) in RULES {
        let Some(value) = page.frontmatter.get(key) else {
            continue;
        };
        match check_value(value, *expect) {
            Checked::Valid => {}
            Checked::Normalized(value) => normalized.push((*key, value)),
            Checked::Invalid => {
                report((*key).to_string(), *expect, value);
                invalid.push(*key);
            }
        }
    }

    let mut dir_fixes: Vec<&str> = Vec::new();
    if let Some(dir) = page.frontmatter.dir() {
        for (key, expect) in DIR_RULES {
            if let Some(value) = dir.get(*key)
                && check_value(value, *expect) == Checked::Invalid
            {
                report(format!("dir.{key}"), *expect, value);
                dir_fixes.push(*key);
            }
        }
    }

    for key in invalid {
        page.frontmatter.remove(key);
    }
    for (key, value) in normalized {
        page.frontmatter.insert(key, value);
    }
    if !dir_fixes.is_empty()
        && let Some(JsonValue::Object(dir)) = page.frontmatter.get("dir").cloned()
    {
        let dir: JsonMap = dir
            .into_iter()
            .filter(|(key, _)| !dir_fixes.contains(&key.as_str()))
            .collect();
        page.frontmatter.insert("dir", dir);
    }

    for diagnostic in &diagnostics {
        log!("frontmatter"; "{}: {}", diagnostic.page, diagnostic);
    }
    if is_debug && !diagnostics.is_empty() {
        log!("frontmatter"; "{} frontmatter: {}", location,
            serde_json::to_string(page.frontmatter.as_map()).unwrap_or_default());
    }

    diagnostics
}

#[derive(Debug, PartialEq)]
enum Checked {
    Valid,
    Normalized(JsonValue),
    Invalid,
}

fn check_value(value: &JsonValue, expect: Expect) -> Checked {
    let valid = match (expect, value) {
        (Expect::String, JsonValue::String(_))
        | (Expect::Bool, JsonValue::Bool(_))
        | (Expect::Number, JsonValue::Number(_))
        | (Expect::Mapping, JsonValue::Object(_)) => true,
        (Expect::Date, JsonValue::String(s)) => DateTime::parse(s).is_some(),
        (Expect::StringList, JsonValue::String(s)) => {
            return Checked::Normalized(JsonValue::Array(vec![JsonValue::String(s.clone())]));
        }
        (Expect::StringList, JsonValue::Array(items)) => items.iter().all(JsonValue::is_string),
        _ => false,
    };
    if valid { Checked::Valid } else { Checked::Invalid }
}

fn kind_of(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(b) => format!("boolean `{b}`"),
        JsonValue::Number(n) => format!("number `{n}`"),
        JsonValue::String(s) => format!("string `{s}`"),
        JsonValue::Array(_) => "a list".to_string(),
        JsonValue::Object(_) => "a mapping".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Frontmatter;
    use serde_json::json;

    fn page(frontmatter: JsonValue) -> Page {
        let frontmatter: Frontmatter = serde_json::from_value(frontmatter).unwrap();
        Page::new("/a.html", Some("a.md".into()), frontmatter)
    }

    #[test]
    fn test_valid_frontmatter_untouched() {
        let mut page = page(json!({
            "title": "T",
            "home": false,
            "order": 2,
            "dir": { "order": 1, "index": false },
            "date": "2024-06-15",
            "tag": ["a", "b"],
            "custom": [1, 2, 3],
        }));
        let before = page.frontmatter.clone();

        assert!(check_frontmatter(&mut page, false).is_empty());
        assert_eq!(page.frontmatter, before);
    }

    #[test]
    fn test_invalid_fields_removed() {
        let mut page = page(json!({ "title": 1, "index": "no", "order": "1", "icon": "ok" }));
        let diagnostics = check_frontmatter(&mut page, false);

        let fields: Vec<_> = diagnostics.iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["title", "index", "order"]);
        assert!(diagnostics.iter().all(|d| d.page == "a.md"));
        assert!(!page.frontmatter.contains("title"));
        assert!(!page.frontmatter.contains("index"));
        assert!(!page.frontmatter.contains("order"));
        assert_eq!(page.frontmatter.get_str("icon"), Some("ok"));
    }

    #[test]
    fn test_string_list_normalized() {
        let mut page = page(json!({ "tag": "rust", "category": ["a", 1] }));
        let diagnostics = check_frontmatter(&mut page, false);

        assert_eq!(page.frontmatter.get("tag"), Some(&json!(["rust"])));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field, "category");
        assert!(!page.frontmatter.contains("category"));
    }

    #[test]
    fn test_dir_fields_checked() {
        let mut page = page(json!({ "dir": { "order": "x", "index": false, "text": "Guide" } }));
        let diagnostics = check_frontmatter(&mut page, true);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field, "dir.order");
        assert_eq!(
            page.frontmatter.get("dir"),
            Some(&json!({ "index": false, "text": "Guide" }))
        );
    }

    #[test]
    fn test_non_mapping_dir_removed() {
        let mut page = page(json!({ "dir": "guide" }));
        let diagnostics = check_frontmatter(&mut page, false);
        assert_eq!(diagnostics[0].field, "dir");
        assert!(!page.frontmatter.contains("dir"));
    }

    #[test]
    fn test_invalid_date() {
        let mut page = page(json!({ "date": "last week" }));
        let diagnostics = check_frontmatter(&mut page, false);
        assert_eq!(diagnostics[0].field, "date");
        assert!(diagnostics[0].message.contains("last week"));
        assert!(!page.frontmatter.contains("date"));
    }
}
