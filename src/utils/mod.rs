//! Shared helpers: dates, paths, pluralization.

pub mod date;
pub mod path;

/// Return "s" suffix for plural counts
///
/// - `plural_s(0)` -> `"s"` (0 documents)
/// - `plural_s(1)` -> `""` (1 document)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "redirect"), "0 redirects");
        assert_eq!(plural_count(1, "redirect"), "1 redirect");
        assert_eq!(plural_count(7, "page"), "7 pages");
    }
}
