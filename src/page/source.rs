//! Page loading from Markdown sources.
//!
//! Only the frontmatter block and the first `# heading` are read; the body is
//! never rendered.

use std::path::{Component, Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::{Frontmatter, JsonMap, Page};
use crate::utils::path::normalize_path;

/// Errors while reading a page source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Invalid YAML frontmatter")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid TOML frontmatter")]
    Toml(#[from] toml::de::Error),

    #[error("Frontmatter must be a mapping, found {0}")]
    NotMapping(&'static str),

    #[error("`{0}` is not inside the content directory")]
    OutsideContent(PathBuf),
}

/// Frontmatter fence style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fence {
    /// `---`
    Yaml,
    /// `+++`
    Toml,
}

/// Extract frontmatter and return `(frontmatter, body)`.
///
/// Returns `Ok(None)` when the content has no frontmatter block.
pub fn extract_frontmatter(content: &str) -> Result<Option<(Frontmatter, &str)>, SourceError> {
    let Some((raw, body, fence)) = detect_frontmatter(content) else {
        return Ok(None);
    };

    let map = match fence {
        Fence::Yaml => parse_yaml(raw)?,
        Fence::Toml => parse_toml(raw)?,
    };
    Ok(Some((Frontmatter::from(map), body)))
}

/// Detect and split off a frontmatter block.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, Fence)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (marker, fence) in [("---", Fence::Yaml), ("+++", Fence::Toml)] {
        let Some(rest) = trimmed.strip_prefix(marker) else {
            continue;
        };
        // empty block: closing fence directly after the opening line
        if let Some(body) = rest
            .strip_prefix('\n')
            .or_else(|| rest.strip_prefix("\r\n"))
            .and_then(|r| r.strip_prefix(marker))
        {
            return Some(("", body.trim_start_matches(['\r', '\n']), fence));
        }
        let closing = format!("\n{marker}");
        if let Some(end) = rest.find(&closing) {
            let raw = rest[..end].trim();
            let body = rest[end + closing.len()..].trim_start_matches(['\r', '\n']);
            return Some((raw, body, fence));
        }
    }

    None
}

fn parse_yaml(raw: &str) -> Result<JsonMap, SourceError> {
    if raw.trim().is_empty() {
        return Ok(JsonMap::new());
    }
    let value: JsonValue = serde_yaml::from_str(raw)?;
    into_map(value)
}

fn parse_toml(raw: &str) -> Result<JsonMap, SourceError> {
    let table: toml::Table = toml::from_str(raw)?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect())
}

fn into_map(value: JsonValue) -> Result<JsonMap, SourceError> {
    match value {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Null => Ok(JsonMap::new()),
        JsonValue::Bool(_) => Err(SourceError::NotMapping("a boolean")),
        JsonValue::Number(_) => Err(SourceError::NotMapping("a number")),
        JsonValue::String(_) => Err(SourceError::NotMapping("a string")),
        JsonValue::Array(_) => Err(SourceError::NotMapping("a sequence")),
    }
}

/// Convert a TOML value to JSON, turning datetimes into their string form.
fn toml_to_json(value: toml::Value) -> JsonValue {
    match value {
        toml::Value::String(s) => JsonValue::String(s),
        toml::Value::Integer(i) => JsonValue::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        toml::Value::Boolean(b) => JsonValue::Bool(b),
        toml::Value::Datetime(dt) => JsonValue::String(dt.to_string()),
        toml::Value::Array(arr) => JsonValue::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}

/// Text of the first level-1 heading in a Markdown body.
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                return (!title.is_empty()).then(|| title.to_string());
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }

    None
}

/// Whether the file is a Markdown source.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "md" | "markdown"))
}

/// Source path relative to the content root, with `/` separators.
///
/// `None` when `file` is not under `content_dir` or the remainder is not a
/// plain path (`..`, `.`).
pub fn relative_source_path(file: &Path, content_dir: &Path) -> Option<String> {
    let rel = file.strip_prefix(content_dir).ok()?;
    let parts = rel
        .components()
        .map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    (!parts.is_empty()).then(|| parts.join("/"))
}

/// Route path for a relative source path.
///
/// ```text
/// README.md          -> /
/// guide/index.md     -> /guide/
/// guide/intro.md     -> /guide/intro.html
/// ```
pub fn route_path(relative: &str) -> String {
    let without_ext = relative
        .rsplit_once('.')
        .map_or(relative, |(stem, _)| stem);

    let (dir, stem) = match without_ext.rsplit_once('/') {
        Some((dir, stem)) => (Some(dir), stem),
        None => (None, without_ext),
    };

    let mut url = String::from("/");
    if let Some(dir) = dir {
        url.push_str(dir);
        url.push('/');
    }
    if !(stem.eq_ignore_ascii_case("readme") || stem == "index") {
        url.push_str(stem);
        url.push_str(".html");
    }
    url
}

/// Load a page from a Markdown source file.
///
/// Both paths are normalized first, so `..` segments and symlinks resolve
/// before the relative path is taken.
pub fn load_page(file: &Path, content_dir: &Path, lang: &str) -> Result<Page, SourceError> {
    let file = normalize_path(file);
    let relative = relative_source_path(&file, &normalize_path(content_dir))
        .ok_or_else(|| SourceError::OutsideContent(file.clone()))?;
    let content =
        std::fs::read_to_string(&file).map_err(|err| SourceError::Io(file.clone(), err))?;
    page_from_source(&content, relative, lang)
}

/// Build a page from source text.
pub fn page_from_source(content: &str, relative: String, lang: &str) -> Result<Page, SourceError> {
    let (frontmatter, body) = match extract_frontmatter(content)? {
        Some((frontmatter, body)) => (frontmatter, body),
        None => (Frontmatter::new(), content),
    };

    let title = frontmatter
        .get_str("title")
        .map(str::to_string)
        .or_else(|| first_heading(body))
        .unwrap_or_default();

    Ok(Page::new(route_path(&relative), Some(relative), frontmatter)
        .with_title(title)
        .with_lang(lang))
}
