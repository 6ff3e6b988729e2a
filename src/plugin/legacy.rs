//! Legacy frontmatter conversion.

use serde_json::Value as JsonValue;

use crate::log;
use crate::page::Frontmatter;

/// Renamed keys: `(old, new)`.
const DEPRECATED_KEYS: &[(&str, &str)] = &[
    ("authors", "author"),
    ("categories", "category"),
    ("tags", "tag"),
    ("time", "date"),
    ("visitor", "pageview"),
    ("sidebarDepth", "headerDepth"),
    ("copyrightText", "copyright"),
];

/// Removed keys: `(key, hint)`.
const DROPPED_KEYS: &[(&str, &str)] = &[("password", "use encryption config instead")];

/// Convert deprecated frontmatter keys in place.
///
/// `file_path_relative` only appears in warnings. Returns the number of
/// changes applied.
pub fn convert_frontmatter(frontmatter: &mut Frontmatter, file_path_relative: &str) -> usize {
    let mut changes = 0;
    let location = if file_path_relative.is_empty() {
        String::new()
    } else {
        format!(" in {file_path_relative}")
    };

    for (old, new) in DEPRECATED_KEYS {
        let Some(value) = frontmatter.remove(old) else {
            continue;
        };
        changes += 1;

        if frontmatter.contains(new) {
            log!("warning"; "`{old}` is deprecated{location}, `{new}` is already set so `{old}` is ignored");
        } else {
            log!("warning"; "`{old}` is deprecated{location}, please use `{new}` instead");
            frontmatter.insert(*new, value);
        }
    }

    for (key, hint) in DROPPED_KEYS {
        if frontmatter.remove(key).is_some() {
            changes += 1;
            log!("warning"; "`{key}` is no longer supported{location}, {hint}");
        }
    }

    if frontmatter.is_truthy("home") && frontmatter.get_str("layout") == Some("Blog") {
        log!("warning"; "`layout: Blog` on a home page is deprecated{location}, please use `layout: BlogHome`");
        frontmatter.insert("layout", JsonValue::from("BlogHome"));
        changes += 1;
    }

    changes
}
