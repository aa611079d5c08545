//! Legacy date-bucketed slugs: `/YYYY/MM/DD/<name>/`.
//!
//! Older builds of the site published every post under its publication date.
//! The legacy slug reconstructs that address so a permanent redirect can point
//! it at the canonical slug.

use crate::utils::date::CalendarDate;

/// Placeholder legacy slug for documents without a usable date.
pub const VOID_SLUG: &str = "/void/";

/// The path segment dropped from slugs in the legacy scheme.
const POSTS_SEGMENT: &str = "/posts/";

/// Compute the legacy slug from a raw front-matter date and the canonical slug.
///
/// Never fails: an absent or unparseable date yields [`VOID_SLUG`].
///
/// Only the first literal `/posts/` is removed from the slug; other prefixes
/// are kept (`/articles/x/` -> `/2020/01/02/articles/x/`).
pub fn legacy_slug(date: Option<&str>, slug: &str) -> String {
    let Some(date) = date.and_then(CalendarDate::parse) else {
        return VOID_SLUG.to_string();
    };

    let tail = slug.replacen(POSTS_SEGMENT, "", 1);
    let tail = tail.strip_prefix('/').unwrap_or(&tail);
    format!("{}/{tail}", date.to_url_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_prefix_removed() {
        assert_eq!(
            legacy_slug(Some("2021-03-05"), "/posts/my-note/"),
            "/2021/03/05/my-note/"
        );
        assert_eq!(
            legacy_slug(Some("2021-11-20"), "/posts/deep/dive/"),
            "/2021/11/20/deep/dive/"
        );
    }

    #[test]
    fn test_other_prefix_kept() {
        assert_eq!(
            legacy_slug(Some("2020-01-02"), "/articles/2020-intro/"),
            "/2020/01/02/articles/2020-intro/"
        );
    }

    #[test]
    fn test_only_first_posts_segment_removed() {
        assert_eq!(
            legacy_slug(Some("2021-03-05"), "/posts/posts/x/"),
            "/2021/03/05/posts/x/"
        );
    }

    #[test]
    fn test_literal_segment_match() {
        // `/blog/posts/x/` contains `/posts/` mid-path; the literal match joins the halves.
        assert_eq!(
            legacy_slug(Some("2021-03-05"), "/blog/posts/x/"),
            "/2021/03/05/blogx/"
        );
    }

    #[test]
    fn test_datetime_forms() {
        for date in [
            "2021-03-05T08:00:00.000Z",
            "2021-03-05T23:30:00+08:00",
            "2021-03-05 10:00",
            "2021-03-05 10:00:00 +0800",
            "2021-03-05T10:00:00+0800",
            "'2021-03-05'",
            "2021/03/05",
        ] {
            assert_eq!(
                legacy_slug(Some(date), "/posts/a/"),
                "/2021/03/05/a/",
                "date: {date:?}"
            );
        }
    }

    #[test]
    fn test_missing_or_bad_date_is_void() {
        assert_eq!(legacy_slug(None, "/posts/a/"), VOID_SLUG);
        assert_eq!(legacy_slug(Some(""), "/posts/a/"), VOID_SLUG);
        assert_eq!(legacy_slug(Some("someday"), "/posts/a/"), VOID_SLUG);
        assert_eq!(legacy_slug(Some("2021-02-30"), "/posts/a/"), VOID_SLUG);
    }

    #[test]
    fn test_permalink_slug() {
        assert_eq!(legacy_slug(Some("2019-07-01"), "/about/"), "/2019/07/01/about/");
    }
}
