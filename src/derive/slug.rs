//! Canonical slug derivation.

/// Strip a trailing `.mdx`, else a trailing `.md`. Case-sensitive.
///
/// `posts/my-note.md` -> `posts/my-note`, `README.MD` -> `README.MD`
pub fn strip_content_ext(path: &str) -> &str {
    path.strip_suffix(".mdx")
        .or_else(|| path.strip_suffix(".md"))
        .unwrap_or(path)
}

/// Compute the canonical slug of a document.
///
/// A non-empty `permalink` wins verbatim: no normalization, no slash fixing.
/// Otherwise the slug is the extension-less relative path wrapped in slashes.
pub fn slug_for(permalink: Option<&str>, relative_path: &str) -> String {
    match permalink {
        Some(permalink) if !permalink.is_empty() => permalink.to_string(),
        _ => format!("/{}/", strip_content_ext(relative_path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_for(None, "posts/my-note.md"), "/posts/my-note/");
        assert_eq!(slug_for(None, "articles/2020-intro.mdx"), "/articles/2020-intro/");
        assert_eq!(slug_for(None, "about.md"), "/about/");
    }

    #[test]
    fn test_permalink_is_verbatim() {
        assert_eq!(slug_for(Some("/about/"), "pages/about.md"), "/about/");
        assert_eq!(slug_for(Some("no-slashes"), "pages/x.md"), "no-slashes");
        assert_eq!(slug_for(Some("/Weird Path"), "pages/x.md"), "/Weird Path");
    }

    #[test]
    fn test_empty_permalink_is_absent() {
        assert_eq!(slug_for(Some(""), "posts/a.md"), "/posts/a/");
    }

    #[test]
    fn test_strip_ext_is_case_sensitive() {
        assert_eq!(strip_content_ext("notes/README.MD"), "notes/README.MD");
        assert_eq!(strip_content_ext("a.mdx"), "a");
        assert_eq!(strip_content_ext("a.md"), "a");
        assert_eq!(strip_content_ext("a.md.mdx"), "a.md");
    }

    #[test]
    fn test_unicode_path() {
        assert_eq!(slug_for(None, "posts/时与风.md"), "/posts/时与风/");
    }
}
