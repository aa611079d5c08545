//! Route table manifest (`routes.json`).
//!
//! ```json
//! {
//!   "pages": [{ "path": "/posts/my-note/", "template": "post", "context": { "slug": "/posts/my-note/" }, ... }],
//!   "redirects": [{ "from": "/2021/03/05/my-note", "to": "/posts/my-note", "permanent": true }],
//!   "listings": { "post": [{ "slug": "/posts/my-note/", "title": "...", "date": "2021-03-05" }] }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::write_file;
use crate::page::{ListingEntry, OutputPage, RedirectTable, RouteTable, listings};

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    pages: &'a [OutputPage],
    redirects: &'a RedirectTable,
    listings: BTreeMap<String, Vec<ListingEntry>>,
}

impl<'a> Manifest<'a> {
    fn new(table: &'a RouteTable) -> Self {
        Self {
            pages: &table.pages,
            redirects: &table.redirects,
            listings: listings(table),
        }
    }
}

/// Serialize the route table; compact when `minify` is set.
pub fn render_manifest(table: &RouteTable, minify: bool) -> Result<Vec<u8>> {
    let manifest = Manifest::new(table);
    let mut bytes = if minify {
        serde_json::to_vec(&manifest)?
    } else {
        serde_json::to_vec_pretty(&manifest)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the manifest to `path`.
pub fn write_manifest(table: &RouteTable, path: &Path, minify: bool) -> Result<()> {
    write_file(path, &render_manifest(table, minify)?)
}
