//! Per-layout page listings for index pages.

use std::collections::BTreeMap;

use serde::Serialize;

use super::RouteTable;
use crate::utils::date::CalendarDate;

/// One row of an index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
}

/// Pages using `layout`, newest first. Undated pages go last, in `DocId` order.
pub fn listing(table: &RouteTable, layout: &str) -> Vec<ListingEntry> {
    let mut entries: Vec<_> = table
        .pages
        .iter()
        .filter(|page| page.template.as_str() == layout)
        .map(|page| ListingEntry {
            slug: page.path.clone(),
            title: page.title.clone(),
            date: page.date,
        })
        .collect();

    // Stable: equal dates keep document order. `None` sorts below any date.
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Listings for every template in use, keyed by template name.
pub fn listings(table: &RouteTable) -> BTreeMap<String, Vec<ListingEntry>> {
    let mut layouts: Vec<_> = table
        .pages
        .iter()
        .map(|page| page.template.as_str())
        .collect();
    layouts.sort_unstable();
    layouts.dedup();

    layouts
        .into_iter()
        .map(|layout| (layout.to_string(), listing(table, layout)))
        .collect()
}
