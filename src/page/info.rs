//! Route metadata keys and storage.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{JsonMap, PageType};

/// Route meta keys, serialized with the compact codes the client reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleInfoType {
    Type,
    Title,
    Icon,
    Order,
    Index,
    ShortTitle,
}

impl ArticleInfoType {
    pub const ALL: [Self; 6] = [
        Self::Type,
        Self::Title,
        Self::Icon,
        Self::Order,
        Self::Index,
        Self::ShortTitle,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Type => "y",
            Self::Title => "t",
            Self::Icon => "i",
            Self::Order => "O",
            Self::Index => "I",
            Self::ShortTitle => "s",
        }
    }

    /// Frontmatter-style name (for logs and human-readable output).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Title => "title",
            Self::Icon => "icon",
            Self::Order => "order",
            Self::Index => "index",
            Self::ShortTitle => "shortTitle",
        }
    }
}

/// Per-page route metadata consumed by rendering and catalog stages.
///
/// A thin wrapper over a JSON map keyed by [`ArticleInfoType::key`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteMeta(JsonMap);

impl RouteMeta {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn set(&mut self, key: ArticleInfoType, value: impl Into<JsonValue>) {
        self.0.insert(key.key().to_string(), value.into());
    }

    #[inline]
    pub fn get(&self, key: ArticleInfoType) -> Option<&JsonValue> {
        self.0.get(key.key())
    }

    #[inline]
    pub fn contains(&self, key: ArticleInfoType) -> bool {
        self.0.contains_key(key.key())
    }

    /// Resolved page type, if classification has run.
    pub fn page_type(&self) -> Option<PageType> {
        self.get(ArticleInfoType::Type)
            .and_then(JsonValue::as_str)
            .and_then(PageType::from_code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand compact keys into readable names.
    pub fn to_named(&self) -> JsonMap {
        ArticleInfoType::ALL
            .iter()
            .filter_map(|key| {
                self.get(*key)
                    .map(|value| (key.name().to_string(), value.clone()))
            })
            .collect()
    }

    pub fn as_map(&self) -> &JsonMap {
        &self.0
    }
}
