//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"              # Source directory for .md/.mdx files
//! output = "public"                # Output directory (relative to site root)
//! minify = true                    # Compact JSON/XML output
//! default_layout = "post"          # Layout for documents that declare none
//! templates = ["post", "about"]    # Templates the renderer provides
//! manifest = "routes.json"         # Route table path (relative to output)
//!
//! [build.redirects]
//! stubs = true                     # HTML meta-refresh stubs at legacy addresses
//! file = true                      # Hosting-layer `_redirects` file
//! path = "_redirects"
//! ```

mod redirects;

pub use redirects::RedirectsConfig;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Content source directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Compact output files.
    pub minify: bool,

    /// Layout assigned to documents without a `layout` field.
    pub default_layout: String,

    /// Closed set of template names; an unknown layout fails the build.
    pub templates: Vec<String>,

    /// Route table output path, relative to the output directory.
    pub manifest: PathBuf,

    /// Redirect output settings.
    pub redirects: RedirectsConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: true,
            default_layout: "post".into(),
            templates: vec!["post".into(), "about".into()],
            manifest: "routes.json".into(),
            redirects: RedirectsConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const TEMPLATES: FieldPath = FieldPath::new("build.templates");
    pub const DEFAULT_LAYOUT: FieldPath = FieldPath::new("build.default_layout");
    pub const MANIFEST: FieldPath = FieldPath::new("build.manifest");

    /// Validate build configuration.
    ///
    /// # Checks
    /// - `templates` is non-empty and has no blank names
    /// - `default_layout` is one of `templates`
    /// - `manifest` is a relative path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.templates.is_empty() {
            diag.error_with_hint(
                Self::TEMPLATES,
                "no templates configured, every document would fail",
                "list the templates your renderer provides, e.g.: [\"post\", \"about\"]",
            );
        } else if self.templates.iter().any(|t| t.trim().is_empty()) {
            diag.error(Self::TEMPLATES, "template names must not be empty");
        }

        if !self.templates.is_empty() && !self.templates.contains(&self.default_layout) {
            diag.error_with_hint(
                Self::DEFAULT_LAYOUT,
                format!(
                    "default layout '{}' is not in {}",
                    self.default_layout,
                    Self::TEMPLATES
                ),
                format!("add '{}' to {}", self.default_layout, Self::TEMPLATES),
            );
        }

        if self.manifest.is_absolute() {
            diag.error(
                Self::MANIFEST,
                "manifest path must be relative to the output directory",
            );
        }

        self.redirects.validate(diag);
    }
}
