//! Embedded static resources.
//!
//! # Usage
//!
//! ```ignore
//! use embed::build::{REDIRECT_HTML, RedirectVars};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { target_url: "/posts/my-note/" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};

    /// Variables for redirect.html template.
    pub struct RedirectVars<'a> {
        /// Already percent-encoded and attribute-safe.
        pub target_url: &'a str,
    }

    impl TemplateVars for RedirectVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__TARGET_URL__", self.target_url)
        }
    }

    /// Meta-refresh stub served at a legacy address.
    pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
        Template::new(include_str!("build/redirect.html"));
}

#[cfg(test)]
mod tests {
    use super::build::{REDIRECT_HTML, RedirectVars};

    #[test]
    fn test_redirect_template_substitutes_every_slot() {
        let html = REDIRECT_HTML.render(&RedirectVars {
            target_url: "/posts/my-note/",
        });
        assert!(!html.contains("__TARGET_URL__"));
        assert!(html.contains(r#"<link rel="canonical" href="/posts/my-note/">"#));
        assert!(html.contains(r#"content="0; url=/posts/my-note/""#));
    }
}
