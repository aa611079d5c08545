//! URL helpers for slugs.
//!
//! Slugs are kept decoded (human-readable, may contain CJK text) everywhere
//! inside the build. They are percent-encoded only at the output boundary:
//! sitemap `<loc>`, redirect stub `href`s, and the `_redirects` file.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside a path segment. `/` is kept as the separator.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode a decoded URL path for use in output files.
pub fn encode_path(decoded: &str) -> String {
    utf8_percent_encode(decoded, SEGMENT).to_string()
}

/// Join a site base URL and a slug: `https://a.io/` + `/posts/x/` -> `https://a.io/posts/x/`
pub fn join_site_url(base: &str, slug: &str) -> String {
    let base = base.trim_end_matches('/');
    if slug.starts_with('/') {
        format!("{base}{}", encode_path(slug))
    } else {
        format!("{base}/{}", encode_path(slug))
    }
}
