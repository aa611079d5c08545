//! Output pages and the route table.

use serde::Serialize;

use super::{RedirectTable, TemplateId};
use crate::content::DocId;
use crate::core::url::join_site_url;
use crate::utils::date::CalendarDate;

/// Data handed to the template for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub slug: String,
}

/// One page the renderer must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputPage {
    /// Public address, equal to the document's slug.
    pub path: String,
    pub template: TemplateId,
    pub context: PageContext,
    pub lang: String,
    /// Source document, relative to the content directory.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
    /// Absolute URL, set when the site URL is known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip)]
    pub doc: DocId,
}

/// Pages and redirects of one build, one of each per document.
///
/// `pages[i]` and `redirects.rules()[i]` both belong to `DocId(i)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    pub pages: Vec<OutputPage>,
    pub redirects: RedirectTable,
}

impl RouteTable {
    /// Fill `canonical_url` on every page from the site base URL.
    pub fn with_site_url(mut self, base: Option<&str>) -> Self {
        if let Some(base) = base {
            for page in &mut self.pages {
                page.canonical_url = Some(join_site_url(base, &page.path));
            }
        }
        self
    }
}
