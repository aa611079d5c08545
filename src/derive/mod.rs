//! Field deriver: per-document routing fields.
//!
//! ```text
//! ContentDocument ──► derive_fields ──► DerivedFields { slug, layout, lang, legacy_slug }
//!                       (pure)
//! [ContentDocument] ──► derive_all ──► DerivedSet (DocId -> DerivedFields)
//!                       (parallel, completes before materialization)
//! ```
//!
//! Derived values are returned, never written back into the document.

mod legacy;
mod slug;

use legacy::legacy_slug;
use slug::slug_for;

use rayon::prelude::*;
use serde::Serialize;

use crate::content::{ContentDocument, DocId};

/// Build-wide defaults for fields a document may omit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveDefaults {
    pub layout: String,
    pub lang: String,
}

impl Default for DeriveDefaults {
    fn default() -> Self {
        Self {
            layout: "post".to_string(),
            lang: "zh-Hans".to_string(),
        }
    }
}

/// Routing fields computed once per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedFields {
    /// Canonical public address, e.g. `/posts/my-note/`.
    pub slug: String,
    /// Template selector, not yet validated against the registry.
    pub layout: String,
    pub lang: String,
    /// Date-bucketed address from older builds, or `/void/`.
    pub legacy_slug: String,
}

/// Treat empty front-matter strings the same as missing ones.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Derive routing fields for one document. Pure; never fails.
pub fn derive_fields(doc: &ContentDocument, defaults: &DeriveDefaults) -> DerivedFields {
    let front = &doc.front;
    let slug = slug_for(non_empty(front.permalink.as_ref()), &doc.relative_path);
    let legacy_slug = legacy_slug(non_empty(front.date.as_ref()), &slug);

    DerivedFields {
        layout: non_empty(front.layout.as_ref())
            .unwrap_or(&defaults.layout)
            .to_string(),
        lang: non_empty(front.lang.as_ref())
            .unwrap_or(&defaults.lang)
            .to_string(),
        slug,
        legacy_slug,
    }
}

/// Every document of one build paired with its derived fields.
///
/// Indexed by [`DocId`]; `docs.len() == fields.len()` always holds.
#[derive(Debug, Clone, Default)]
pub struct DerivedSet {
    docs: Vec<ContentDocument>,
    fields: Vec<DerivedFields>,
}

impl DerivedSet {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Iterate in `DocId` order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &ContentDocument, &DerivedFields)> {
        self.docs
            .iter()
            .zip(&self.fields)
            .enumerate()
            .map(|(i, (doc, fields))| (DocId(i), doc, fields))
    }
}

/// Derive fields for every document in parallel.
///
/// Returns only once all documents are done; the result owns the documents
/// so later stages read one consistent snapshot.
pub fn derive_all(docs: Vec<ContentDocument>, defaults: &DeriveDefaults) -> DerivedSet {
    let fields = docs
        .par_iter()
        .map(|doc| derive_fields(doc, defaults))
        .collect();
    DerivedSet { docs, fields }
}
