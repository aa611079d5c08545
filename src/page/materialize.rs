//! Page materializer: derived fields -> route table.

use super::conflict::detect_conflicts;
use super::error::{MissingTemplate, UnsafePath};
use super::{BuildError, OutputPage, PageContext, RedirectRule, RouteTable, TemplateRegistry};
use crate::content::QueryError;
use crate::debug;
use crate::derive::DerivedSet;
use crate::utils::date::CalendarDate;
use crate::utils::path::has_dot_segment;

/// Turn the derived set into pages and redirects.
///
/// Runs after derivation has finished for every document. A failed listing
/// fails before anything is emitted. Every document must resolve to a known
/// template and claim a distinct path; otherwise nothing is returned.
///
/// On success, `pages[i]` and `redirects[i]` both belong to `DocId(i)`.
pub fn materialize(
    derived: Result<&DerivedSet, QueryError>,
    registry: &TemplateRegistry,
) -> Result<RouteTable, BuildError> {
    let derived = derived?;

    let mut table = RouteTable {
        pages: Vec::with_capacity(derived.len()),
        ..RouteTable::default()
    };
    let mut missing = Vec::new();
    let mut unsafe_paths = Vec::new();

    for (id, doc, fields) in derived.iter() {
        for path in [&fields.slug, &fields.legacy_slug] {
            if has_dot_segment(path) {
                unsafe_paths.push(UnsafePath {
                    path: path.clone(),
                    source: doc.relative_path.clone(),
                });
            }
        }

        let Some(template) = registry.resolve(&fields.layout) else {
            missing.push(MissingTemplate {
                layout: fields.layout.clone(),
                source: doc.relative_path.clone(),
            });
            continue;
        };

        table.pages.push(OutputPage {
            path: fields.slug.clone(),
            template,
            context: PageContext {
                slug: fields.slug.clone(),
            },
            lang: fields.lang.clone(),
            source: doc.relative_path.clone(),
            title: doc.front.title.clone(),
            date: doc.front.date.as_deref().and_then(CalendarDate::parse),
            canonical_url: None,
            doc: id,
        });
        table
            .redirects
            .push(RedirectRule::permanent(&fields.legacy_slug, &fields.slug, id));
    }

    if !missing.is_empty() {
        return Err(BuildError::MissingTemplate(missing));
    }
    if !unsafe_paths.is_empty() {
        return Err(BuildError::UnsafePath(unsafe_paths));
    }

    let conflicts = detect_conflicts(&table.pages);
    if !conflicts.is_empty() {
        return Err(BuildError::PathConflict(conflicts));
    }

    debug!("page"; "materialized {} pages, {} redirects", table.pages.len(), table.redirects.len());
    Ok(table)
}
