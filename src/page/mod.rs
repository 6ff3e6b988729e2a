//! Page types: frontmatter, classification, and route metadata.

mod classify;
mod frontmatter;
mod info;
mod kind;
mod model;
pub mod source;

pub use classify::{inject_page_info, resolve_page_type};
pub use frontmatter::{Frontmatter, is_truthy};
pub use info::{ArticleInfoType, RouteMeta};
pub use kind::PageType;
pub use model::{Page, PageData};
pub use source::{SourceError, load_page};

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
