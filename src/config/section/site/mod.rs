//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "时与风"
//! url = "https://raptazure.github.io"
//! language = "zh-Hans"
//!
//! [site.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

mod info;
mod sitemap;

pub use info::SiteInfoConfig;
pub use sitemap::SitemapConfig;

use serde::{Deserialize, Serialize};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, url, language).
    pub info: SiteInfoConfig,

    /// Sitemap generation settings.
    pub sitemap: SitemapConfig,
}
