//! Path conflict detection and redirect warnings.

use rustc_hash::FxHashMap;

use super::{OutputPage, RedirectTable};
use crate::log;
use crate::utils::plural_s;

/// A page path claimed by more than one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConflict {
    /// The conflicting path
    pub path: String,
    /// All documents claiming this path, in `DocId` order
    pub sources: Vec<String>,
}

/// Detect page paths claimed by multiple documents.
///
/// Conflicts are returned sorted by path.
pub fn detect_conflicts(pages: &[OutputPage]) -> Vec<PathConflict> {
    let mut path_sources: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for page in pages {
        path_sources
            .entry(page.path.as_str())
            .or_default()
            .push(page.source.as_str());
    }

    let mut conflicts: Vec<_> = path_sources
        .into_iter()
        .filter(|(_, sources)| sources.len() > 1)
        .map(|(path, sources)| PathConflict {
            path: path.to_string(),
            sources: sources.into_iter().map(str::to_string).collect(),
        })
        .collect();
    conflicts.sort_by(|a, b| a.path.cmp(&b.path));
    conflicts
}

/// Print conflicts using the standard log format.
///
/// Output format:
/// ```text
/// [error] page path conflicts (1 path, 2 sources)
/// [path] /about/ (2 sources)
///   - about.md
///   - pages/about.mdx
/// ```
pub fn print_conflicts(conflicts: &[PathConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "page path conflicts ({} path{}, {} source{})",
        conflicts.len(), plural_s(conflicts.len()),
        total_sources, plural_s(total_sources));

    for conflict in conflicts {
        eprintln!();
        log!("path"; "{} ({} source{})", conflict.path, conflict.sources.len(), plural_s(conflict.sources.len()));
        for source in &conflict.sources {
            eprintln!("  - {source}");
        }
    }
}

/// Format conflicts as a string (for error messages).
pub fn format_conflicts(conflicts: &[PathConflict]) -> String {
    conflicts
        .iter()
        .map(|conflict| {
            let mut lines = vec![format!("{} ({})", conflict.path, conflict.sources.len())];
            for source in &conflict.sources {
                lines.push(format!("  - {source}"));
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Warn about redirect rules that shadow each other or point at themselves.
///
/// Returns the number of warnings printed.
pub fn warn_redirects(table: &RedirectTable, pages: &[OutputPage]) -> usize {
    let mut warnings = 0;

    for rule in table.loops() {
        let source = pages.get(rule.doc.0).map_or("?", |p| p.source.as_str());
        log!("warning"; "redirect {} points at itself ({source}), skipped", rule.from);
        warnings += 1;
    }

    for collision in table.collisions() {
        let count = collision.targets.len();
        let effective = collision.targets.last().map_or("", String::as_str);
        log!("warning"; "{count} redirect{} from {}, last one wins: {effective}",
            plural_s(count), collision.from);
        warnings += 1;
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DocId;
    use crate::page::{PageContext, RedirectRule, TemplateRegistry};

    fn make_page(source: &str, path: &str) -> OutputPage {
        OutputPage {
            path: path.to_string(),
            template: TemplateRegistry::new(["post"]).resolve("post").unwrap(),
            context: PageContext {
                slug: path.to_string(),
            },
            lang: "zh-Hans".to_string(),
            source: source.to_string(),
            title: None,
            date: None,
            canonical_url: None,
            doc: DocId(0),
        }
    }

    #[test]
    fn test_no_conflicts() {
        let pages = vec![
            make_page("a.md", "/a/"),
            make_page("b.md", "/b/"),
            make_page("c.md", "/c/"),
        ];
        assert!(detect_conflicts(&pages).is_empty());
    }

    #[test]
    fn test_permalink_vs_path_conflict() {
        let pages = vec![
            make_page("about.md", "/about/"),
            make_page("pages/me.mdx", "/about/"),
        ];
        let conflicts = detect_conflicts(&pages);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].path, "/about/");
        assert_eq!(conflicts[0].sources, vec!["about.md", "pages/me.mdx"]);
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let pages = vec![make_page("a.md", "/a/"), make_page("b.md", "/a")];
        assert!(detect_conflicts(&pages).is_empty());
    }

    #[test]
    fn test_multiple_conflicts_sorted() {
        let pages = vec![
            make_page("z1.md", "/z/"),
            make_page("a1.md", "/a/"),
            make_page("z2.md", "/z/"),
            make_page("a2.md", "/a/"),
            make_page("a3.md", "/a/"),
        ];
        let conflicts = detect_conflicts(&pages);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].path, "/a/");
        assert_eq!(conflicts[0].sources.len(), 3);
        assert_eq!(conflicts[1].path, "/z/");
    }

    #[test]
    fn test_format_conflicts() {
        let conflicts = vec![PathConflict {
            path: "/foo/".to_string(),
            sources: vec!["a.md".to_string(), "b.md".to_string()],
        }];
        let formatted = format_conflicts(&conflicts);
        assert!(formatted.contains("/foo/ (2)"));
        assert!(formatted.contains("  - a.md"));
        assert!(formatted.contains("  - b.md"));
    }

    #[test]
    fn test_warn_redirects_counts() {
        let mut table = RedirectTable::default();
        table.push(RedirectRule::permanent("/void/", "/a/", DocId(0)));
        table.push(RedirectRule::permanent("/void/", "/b/", DocId(1)));
        table.push(RedirectRule::permanent("/2021/01/01/c/", "/2021/01/01/c/", DocId(2)));
        let pages = vec![
            make_page("a.md", "/a/"),
            make_page("b.md", "/b/"),
            make_page("c.md", "/2021/01/01/c/"),
        ];
        assert_eq!(warn_redirects(&table, &pages), 2);
    }
}
