//! Build orchestration.
//!
//! Build phases:
//! - **Plan** - Collect documents, derive fields, materialize routes
//! - **Report** - Redirect collisions and self-redirects
//! - **Write** - Manifest, redirect stubs, redirect file, sitemap

use std::time::Instant;

use anyhow::{Result, bail};

use super::common::plan_routes;
use crate::config::{SiteConfig, SiteInfoConfig, SitemapConfig};
use crate::generator::{manifest, redirects, sitemap::Sitemap};
use crate::logger::ProgressLine;
use crate::page::{BuildError, RouteTable, print_conflicts, warn_redirects};
use crate::utils::plural_count;
use crate::log;

/// Plan routes and write every output.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let start = Instant::now();

    let table = match plan_routes(config) {
        Ok(table) => table,
        Err(BuildError::PathConflict(conflicts)) => {
            print_conflicts(&conflicts);
            bail!("build aborted: {}", plural_count(conflicts.len(), "path conflict"));
        }
        Err(err) => return Err(err.into()),
    };

    warn_redirects(&table.redirects, &table.pages);
    write_outputs(&table, config)?;

    log!("done"; "{}, {} in {:.2?}",
        plural_count(table.pages.len(), "page"),
        plural_count(table.redirects.len(), "redirect"),
        start.elapsed());
    Ok(())
}

/// Write outputs for a materialized table.
pub fn write_outputs(table: &RouteTable, config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    let minify = config.build.minify;

    let (manifest_result, sitemap_result) = rayon::join(
        || {
            let path = config.output_join(&config.build.manifest);
            manifest::write_manifest(table, &path, minify)
        },
        || match (config.site.sitemap.enable, config.site_url()) {
            (true, Some(url)) => Sitemap::build(table, url)
                .write(&config.output_join(&config.site.sitemap.path), minify),
            (true, None) => {
                log!("warning"; "{} is on but {} is not set, skipping sitemap",
                    SitemapConfig::ENABLE, SiteInfoConfig::URL);
                Ok(())
            }
            (false, _) => Ok(()),
        },
    );
    manifest_result?;
    sitemap_result?;

    if config.build.redirects.stubs {
        let count = redirects::stub_rules(table).len();
        let progress = ProgressLine::new(&[("redirects", count)]);
        redirects::write_stubs(table, output, Some(&progress))?;
        progress.finish();
    }

    if config.build.redirects.file {
        redirects::write_redirects_file(table, &config.output_join(&config.build.redirects.path))?;
    }

    Ok(())
}
