//! Output writers for the materialized route table.
//!
//! Runs only after materialization succeeded:
//!
//! - **Manifest**: the route table as JSON for the renderer (`routes.json`)
//! - **Redirects**: meta-refresh stubs and a hosting `_redirects` file
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod manifest;
pub mod redirects;
pub mod sitemap;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Minify XML content if enabled.
pub fn minify_xml(content: &[u8], enabled: bool) -> Cow<'_, [u8]> {
    if enabled {
        let xml_str = std::str::from_utf8(content).unwrap_or("");
        let minified = xml_str
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified.into_bytes())
    } else {
        Cow::Borrowed(content)
    }
}

/// Escape special XML/HTML characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

/// Write a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
