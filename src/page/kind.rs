//! Page type classification.

use serde::{Deserialize, Serialize};

/// Page type stored in route meta.
///
/// Serialized with the compact codes the client bundle reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageType {
    /// Site or project home page (`home: true`).
    #[serde(rename = "h")]
    Home,
    /// Slide deck (`layout: Slide`).
    #[serde(rename = "s")]
    Slide,
    /// Article, listed by blog and catalog components.
    #[serde(rename = "a")]
    Article,
    /// Plain page.
    #[serde(rename = "p")]
    Page,
}

impl PageType {
    /// Compact code used in route meta.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Home => "h",
            Self::Slide => "s",
            Self::Article => "a",
            Self::Page => "p",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "h" => Some(Self::Home),
            "s" => Some(Self::Slide),
            "a" => Some(Self::Article),
            "p" => Some(Self::Page),
            _ => None,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Slide => "slide",
            Self::Article => "article",
            Self::Page => "page",
        }
    }

    #[inline]
    pub fn is_article(&self) -> bool {
        matches!(self, Self::Article)
    }
}

impl From<PageType> for serde_json::Value {
    fn from(kind: PageType) -> Self {
        serde_json::Value::String(kind.code().to_string())
    }
}
