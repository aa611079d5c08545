//! Content document and its front-matter.

use serde::Serialize;

use crate::core::ContentKind;

/// A JSON object map for arbitrary front-matter fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Identity of a document within one build: its index in the sorted listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocId(pub usize);

impl std::fmt::Display for DocId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Front-matter fields read from the head of a document.
///
/// | Field       | Meaning                                        |
/// |-------------|------------------------------------------------|
/// | `title`     | Display title (listings)                       |
/// | `date`      | Publication date, raw text as written          |
/// | `permalink` | Explicit canonical address (used verbatim)     |
/// | `layout`    | Template selector                              |
/// | `lang`      | Display language tag                           |
///
/// Anything else lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl FrontMatter {
    /// Store a field by key. Known keys are matched case-insensitively;
    /// `null` clears a known field.
    pub fn set(&mut self, key: &str, value: serde_json::Value) {
        let slot = match key.to_ascii_lowercase().as_str() {
            "title" => &mut self.title,
            "date" => &mut self.date,
            "permalink" => &mut self.permalink,
            "layout" => &mut self.layout,
            "lang" => &mut self.lang,
            _ => {
                self.extra.insert(key.to_string(), value);
                return;
            }
        };
        *slot = match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        };
    }
}

/// One authored Markdown/MDX file.
///
/// Immutable once discovered. Derived routing data lives beside it, keyed by
/// [`DocId`], never inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentDocument {
    /// Path relative to the content directory, `/`-separated.
    pub relative_path: String,
    #[serde(skip)]
    pub kind: ContentKind,
    pub front: FrontMatter,
}

impl ContentDocument {
    pub fn new(relative_path: impl Into<String>, front: FrontMatter) -> Self {
        let relative_path = relative_path.into();
        let kind = ContentKind::from_path(std::path::Path::new(&relative_path))
            .unwrap_or(ContentKind::Markdown);
        Self {
            relative_path,
            kind,
            front,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_known_fields() {
        let mut front = FrontMatter::default();
        front.set("Title", json!("Hello"));
        front.set("layout", json!("about"));
        front.set("date", json!(20210305));
        assert_eq!(front.title.as_deref(), Some("Hello"));
        assert_eq!(front.layout.as_deref(), Some("about"));
        assert_eq!(front.date.as_deref(), Some("20210305"));
        assert!(front.extra.is_empty());
    }

    #[test]
    fn test_set_null_clears() {
        let mut front = FrontMatter::default();
        front.set("lang", json!("en"));
        front.set("lang", serde_json::Value::Null);
        assert!(front.lang.is_none());
    }

    #[test]
    fn test_set_extra_preserves_key_case() {
        let mut front = FrontMatter::default();
        front.set("coverImage", json!("cover.png"));
        assert_eq!(front.extra.get("coverImage"), Some(&json!("cover.png")));
    }

    #[test]
    fn test_document_kind_from_path() {
        let doc = ContentDocument::new("articles/2020-intro.mdx", FrontMatter::default());
        assert_eq!(doc.kind, ContentKind::Mdx);
        let doc = ContentDocument::new("posts/a.md", FrontMatter::default());
        assert_eq!(doc.kind, ContentKind::Markdown);
    }

    #[test]
    fn test_front_matter_serializes_flat() {
        let mut front = FrontMatter::default();
        front.set("title", json!("Hi"));
        front.set("tags", json!(["a"]));
        let value = serde_json::to_value(&front).unwrap();
        assert_eq!(value, json!({"title": "Hi", "tags": ["a"]}));
    }
}
