//! `[build.redirects]` configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Write `{from}/index.html` meta-refresh stubs.
    pub stubs: bool,

    /// Write a hosting-layer redirect file.
    pub file: bool,

    /// Redirect file path, relative to the output directory.
    pub path: PathBuf,
}

impl Default for RedirectsConfig {
    fn default() -> Self {
        Self {
            stubs: true,
            file: true,
            path: "_redirects".into(),
        }
    }
}

impl RedirectsConfig {
    pub const PATH: FieldPath = FieldPath::new("build.redirects.path");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.file && (self.path.as_os_str().is_empty() || self.path.is_absolute()) {
            diag.error_with_hint(
                Self::PATH,
                "redirect file path must be a relative file name",
                "e.g.: \"_redirects\"",
            );
        }
    }
}
