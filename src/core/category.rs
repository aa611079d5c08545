//! Content file kinds.

use std::path::Path;

/// Kind of content file picked up by the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    /// Plain Markdown (`.md`)
    Markdown,
    /// Markdown with embedded components (`.mdx`)
    Mdx,
}

impl ContentKind {
    /// Detect content kind from file extension. Case-sensitive, like slug
    /// derivation: `POST.MD` is not content.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "md" => Some(Self::Markdown),
            "mdx" => Some(Self::Mdx),
            _ => None,
        }
    }

    /// Detect content kind from file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            ContentKind::from_path(Path::new("posts/a.md")),
            Some(ContentKind::Markdown)
        );
        assert_eq!(
            ContentKind::from_path(Path::new("articles/2020-intro.mdx")),
            Some(ContentKind::Mdx)
        );
        assert_eq!(ContentKind::from_path(Path::new("images/cover.png")), None);
        assert_eq!(ContentKind::from_path(Path::new("README.MD")), None);
        assert_eq!(ContentKind::from_path(Path::new("Makefile")), None);
    }
}
