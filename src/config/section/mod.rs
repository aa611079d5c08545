//! Configuration section definitions.
//!
//! Each module corresponds to a section in `windvane.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Paths, templates, redirects, manifest    |
//! | `site`  | `[site]`     | Site info and sitemap                    |

pub mod build;
pub mod site;

pub use build::BuildSectionConfig;
pub use site::{SiteInfoConfig, SiteSectionConfig, SitemapConfig};
