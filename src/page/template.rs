//! Closed registry of known page templates.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A layout name that was checked against the [`TemplateRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The set of templates the renderer provides.
///
/// Lookups are exact and case-sensitive. There is no fallback template:
/// an unknown layout is a build error.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    names: BTreeSet<String>,
}

impl TemplateRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Resolve a layout name to a template identifier.
    pub fn resolve(&self, layout: &str) -> Option<TemplateId> {
        self.contains(layout)
            .then(|| TemplateId(layout.to_string()))
    }

    pub fn contains(&self, layout: &str) -> bool {
        self.names.contains(layout)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        let registry = TemplateRegistry::new(["post", "about"]);
        assert_eq!(registry.resolve("post").unwrap().as_str(), "post");
        assert!(registry.contains("about"));
    }

    #[test]
    fn test_resolve_is_exact() {
        let registry = TemplateRegistry::new(["post"]);
        assert!(registry.resolve("Post").is_none());
        assert!(registry.resolve("journal").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_names_sorted_and_deduplicated() {
        let registry = TemplateRegistry::new(["post", "about", "post"]);
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["about", "post"]);
        assert_eq!(registry.names().count(), 2);
    }
}
