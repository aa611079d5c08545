//! Sitemap generation configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::FieldPath;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation. Skipped with a warning when `site.info.url` is unset.
    pub enable: bool,
    /// Output path for sitemap file, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

impl SitemapConfig {
    pub const ENABLE: FieldPath = FieldPath::new("site.sitemap.enable");
}
