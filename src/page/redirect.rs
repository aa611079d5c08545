//! Permanent redirects from legacy date-bucketed addresses.

use serde::Serialize;

use crate::content::DocId;
use crate::utils::path::strip_one_trailing_slash;

/// One redirect from a legacy address to a canonical slug.
///
/// Both ends are stored without their trailing slash, the way the hosting
/// layer registers them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    pub permanent: bool,
    /// Document that produced the rule.
    #[serde(skip)]
    pub doc: DocId,
}

impl RedirectRule {
    /// Build the permanent redirect `legacy_slug -> slug` for one document.
    pub fn permanent(legacy_slug: &str, slug: &str, doc: DocId) -> Self {
        Self {
            from: strip_one_trailing_slash(legacy_slug).to_string(),
            to: strip_one_trailing_slash(slug).to_string(),
            permanent: true,
            doc,
        }
    }

    /// A rule pointing at itself. Kept in the table, never written out.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// HTTP status for hosting-layer redirect files.
    pub fn status(&self) -> u16 {
        if self.permanent { 301 } else { 302 }
    }
}

/// Several rules registered for the same `from` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectCollision {
    pub from: String,
    /// Targets in registration order; the last one is effective.
    pub targets: Vec<String>,
}

/// All redirect rules of a build, in registration (`DocId`) order.
///
/// Rules are never deduplicated. [`RedirectTable::effective`] gives the
/// routing a host would actually apply when later rules override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RedirectTable {
    rules: Vec<RedirectRule>,
}

impl RedirectTable {
    pub fn push(&mut self, rule: RedirectRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[RedirectRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Last-write-wins view: one rule per `from`, loops excluded, in the
    /// order the winning rules were registered.
    pub fn effective(&self) -> Vec<&RedirectRule> {
        let mut winner = rustc_hash::FxHashMap::default();
        for (idx, rule) in self.rules.iter().enumerate() {
            winner.insert(rule.from.as_str(), idx);
        }

        let mut indices: Vec<_> = winner.into_values().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .map(|idx| &self.rules[idx])
            .filter(|rule| !rule.is_loop())
            .collect()
    }

    /// Rules that redirect to themselves.
    pub fn loops(&self) -> impl Iterator<Item = &RedirectRule> {
        self.rules.iter().filter(|rule| rule.is_loop())
    }

    /// `from` addresses claimed by more than one rule with differing targets.
    pub fn collisions(&self) -> Vec<RedirectCollision> {
        let mut groups: Vec<RedirectCollision> = Vec::new();
        let mut index = rustc_hash::FxHashMap::default();

        for rule in &self.rules {
            let slot = *index.entry(rule.from.as_str()).or_insert_with(|| {
                groups.push(RedirectCollision {
                    from: rule.from.clone(),
                    targets: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].targets.push(rule.to.clone());
        }

        groups
            .into_iter()
            .filter(|group| group.targets.iter().any(|t| t != &group.targets[0]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RedirectTable {
        let mut table = RedirectTable::default();
        for (i, (from, to)) in pairs.iter().enumerate() {
            table.push(RedirectRule::permanent(from, to, DocId(i)));
        }
        table
    }

    #[test]
    fn test_rule_strips_one_trailing_slash() {
        let rule = RedirectRule::permanent(
            "/2020/01/02/articles/2020-intro/",
            "/articles/2020-intro/",
            DocId(0),
        );
        assert_eq!(rule.from, "/2020/01/02/articles/2020-intro");
        assert_eq!(rule.to, "/articles/2020-intro");
        assert!(rule.permanent);
        assert_eq!(rule.status(), 301);
        assert!(!rule.is_loop());
    }

    #[test]
    fn test_void_rule() {
        let rule = RedirectRule::permanent("/void/", "/posts/a/", DocId(0));
        assert_eq!(rule.from, "/void");
        assert_eq!(rule.to, "/posts/a");
    }

    #[test]
    fn test_loop_detection() {
        let rule = RedirectRule::permanent("/2021/03/05/a/", "/2021/03/05/a", DocId(0));
        assert!(rule.is_loop());
    }

    #[test]
    fn test_effective_is_last_write_wins() {
        let table = table(&[
            ("/void/", "/posts/a/"),
            ("/2021/03/05/b/", "/posts/b/"),
            ("/void/", "/posts/c/"),
        ]);
        assert_eq!(table.len(), 3);

        let effective: Vec<_> = table
            .effective()
            .iter()
            .map(|r| (r.from.as_str(), r.to.as_str()))
            .collect();
        assert_eq!(
            effective,
            vec![("/2021/03/05/b", "/posts/b"), ("/void", "/posts/c")]
        );
    }

    #[test]
    fn test_effective_skips_loops() {
        let table = table(&[("/x/", "/x/"), ("/y/", "/z/")]);
        assert_eq!(table.effective().len(), 1);
        assert_eq!(table.loops().count(), 1);
    }

    #[test]
    fn test_collisions() {
        let table = table(&[
            ("/void/", "/posts/a/"),
            ("/void/", "/posts/b/"),
            ("/2021/01/01/same/", "/same/"),
            ("/2021/01/01/same/", "/same/"),
        ]);
        let collisions = table.collisions();
        assert_eq!(
            collisions,
            vec![RedirectCollision {
                from: "/void".to_string(),
                targets: vec!["/posts/a".to_string(), "/posts/b".to_string()],
            }]
        );
    }

    #[test]
    fn test_serializes_rules_without_doc() {
        let table = table(&[("/2021/03/05/a/", "/posts/a/")]);
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{"from": "/2021/03/05/a", "to": "/posts/a", "permanent": true}])
        );
    }
}
