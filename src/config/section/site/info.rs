//! `[site.info]` configuration.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site URL (e.g., "https://raptazure.github.io"). Needed for canonical
    /// URLs and the sitemap.
    pub url: Option<String>,

    /// Default language for documents that declare none.
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            language: "zh-Hans".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const URL: FieldPath = FieldPath::new("site.info.url");
    pub const LANGUAGE: FieldPath = FieldPath::new("site.info.language");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `language` must not be empty
    /// - `url`, when set, must be an absolute http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.language.trim().is_empty() {
            diag.error_with_hint(
                Self::LANGUAGE,
                "language must not be empty",
                "use a BCP 47 tag like \"zh-Hans\" or \"en\"",
            );
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(info: &SiteInfoConfig) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        diag.errors().iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_default_language() {
        assert_eq!(SiteInfoConfig::default().language, "zh-Hans");
    }

    #[test]
    fn test_valid_url() {
        let info = SiteInfoConfig {
            url: Some("https://raptazure.github.io".into()),
            ..Default::default()
        };
        assert!(errors(&info).is_empty());
    }

    #[test]
    fn test_invalid_urls() {
        for url in ["raptazure.github.io", "ftp://example.com", "https://"] {
            let info = SiteInfoConfig {
                url: Some(url.into()),
                ..Default::default()
            };
            assert_eq!(errors(&info).len(), 1, "url: {url}");
        }
    }

    #[test]
    fn test_url_is_optional() {
        assert!(errors(&SiteInfoConfig::default()).is_empty());
    }

    #[test]
    fn test_empty_language() {
        let info = SiteInfoConfig {
            language: " ".into(),
            ..Default::default()
        };
        assert_eq!(errors(&info), vec!["language must not be empty"]);
    }
}
