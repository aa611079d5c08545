//! Pipeline stages shared across CLI commands.
//!
//! ```text
//! collect (FsSource) ──► derive_all ──► materialize ──► RouteTable
//! ```

use crate::config::SiteConfig;
use crate::content::{DocumentSource, FsSource, QueryError};
use crate::debug;
use crate::derive::{DerivedSet, derive_all};
use crate::page::{BuildError, RouteTable, materialize};

/// List content documents and derive their fields.
pub fn collect_and_derive(config: &SiteConfig) -> Result<DerivedSet, QueryError> {
    let docs = FsSource::new(&config.build.content).documents()?;
    debug!("derive"; "{} documents", docs.len());
    Ok(derive_all(docs, &config.derive_defaults()))
}

/// Run collection, derivation, and materialization.
///
/// A failed listing goes through `materialize` so it fails the same way as
/// any other build error.
pub fn plan_routes(config: &SiteConfig) -> Result<RouteTable, BuildError> {
    let registry = config.template_registry();
    let table = match collect_and_derive(config) {
        Ok(set) => materialize(Ok(&set), &registry)?,
        Err(err) => materialize(Err(err), &registry)?,
    };
    Ok(table.with_site_url(config.site_url()))
}
