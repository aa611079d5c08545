//! Materialization errors.

use thiserror::Error;

use super::conflict::{PathConflict, format_conflicts};
use crate::content::QueryError;
use crate::utils::plural_count;

/// A document selected a layout that has no template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTemplate {
    pub layout: String,
    /// Source document, relative to the content directory.
    pub source: String,
}

/// A document's slug or legacy slug has `.`/`..` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsafePath {
    pub path: String,
    /// Source document, relative to the content directory.
    pub source: String,
}

/// Fatal errors that stop the build before anything is written.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("document listing failed: {0}")]
    DocumentQuery(#[from] QueryError),

    #[error("{}\n{}", missing_summary(.0), format_missing(.0))]
    MissingTemplate(Vec<MissingTemplate>),

    #[error("{} with `.` or `..` segments\n{}", plural_count(.0.len(), "path"), format_unsafe(.0))]
    UnsafePath(Vec<UnsafePath>),

    #[error("page path conflicts ({})\n{}", plural_count(.0.len(), "path"), format_conflicts(.0))]
    PathConflict(Vec<PathConflict>),
}

fn missing_summary(missing: &[MissingTemplate]) -> String {
    format!(
        "no template for {}",
        plural_count(missing.len(), "document")
    )
}

fn format_missing(missing: &[MissingTemplate]) -> String {
    missing
        .iter()
        .map(|m| format!("  - {} (layout `{}`)", m.source, m.layout))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_unsafe(paths: &[UnsafePath]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {} ({})", p.path, p.source))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template_message_lists_documents() {
        let err = BuildError::MissingTemplate(vec![
            MissingTemplate {
                layout: "journal".to_string(),
                source: "journal/a.md".to_string(),
            },
            MissingTemplate {
                layout: "gallery".to_string(),
                source: "b.mdx".to_string(),
            },
        ]);
        let message = err.to_string();
        assert!(message.starts_with("no template for 2 documents"));
        assert!(message.contains("journal/a.md (layout `journal`)"));
        assert!(message.contains("b.mdx (layout `gallery`)"));
    }
}
