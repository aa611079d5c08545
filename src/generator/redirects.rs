//! Redirect outputs: meta-refresh stub pages and the hosting redirect file.
//!
//! ```text
//! RedirectRule { from: "/2021/03/05/my-note", to: "/posts/my-note" }
//!   ├── {output}/2021/03/05/my-note/index.html   (meta refresh -> /posts/my-note/)
//!   └── _redirects: "/2021/03/05/my-note /posts/my-note 301"
//! ```
//!
//! Both writers use the effective (last-wins) rule set; self-redirects never
//! reach disk.

use std::path::Path;

use anyhow::{Result, anyhow};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use super::{escape_xml, write_file};
use crate::core::url::encode_path;
use crate::embed::build::{REDIRECT_HTML, RedirectVars};
use crate::logger::ProgressLine;
use crate::page::{RedirectRule, RouteTable};
use crate::utils::path::{strip_one_trailing_slash, url_to_index_file};
use crate::{debug, log};

/// Rules that get a stub page.
///
/// Skips rules whose `from` is the site root or an address a page is
/// published at: the page wins.
pub fn stub_rules(table: &RouteTable) -> Vec<&RedirectRule> {
    let page_paths: FxHashSet<&str> = table
        .pages
        .iter()
        .map(|page| strip_one_trailing_slash(&page.path))
        .collect();

    table
        .redirects
        .effective()
        .into_iter()
        .filter(|rule| {
            if rule.from.trim_matches('/').is_empty() {
                return false;
            }
            if page_paths.contains(rule.from.as_str()) {
                debug!("redirect"; "{} is a page address, no stub", rule.from);
                return false;
            }
            true
        })
        .collect()
}

/// Target of a stub: the canonical slug with its trailing slash restored.
fn stub_target(rule: &RedirectRule) -> String {
    encode_path(&format!("{}/", rule.to))
}

/// Render the stub page for one rule.
pub fn render_stub(rule: &RedirectRule) -> String {
    let target = stub_target(rule);
    REDIRECT_HTML.render(&RedirectVars {
        target_url: &escape_xml(&target),
    })
}

/// Write `{output}/{from}/index.html` for every stub rule. Returns the count.
pub fn write_stubs(
    table: &RouteTable,
    output_dir: &Path,
    progress: Option<&ProgressLine>,
) -> Result<usize> {
    let rules = stub_rules(table);

    rules.par_iter().try_for_each(|rule| {
        let path = url_to_index_file(&rule.from, output_dir).ok_or_else(|| {
            anyhow!("redirect source `{}` escapes the output directory", rule.from)
        })?;
        write_file(&path, render_stub(rule).as_bytes())?;
        debug!("redirect"; "{} -> {}/", rule.from, rule.to);
        if let Some(progress) = progress {
            progress.inc("redirects");
        }
        Ok::<_, anyhow::Error>(())
    })?;

    Ok(rules.len())
}

/// Render the hosting redirect file: one `from to 301` line per rule.
pub fn render_redirects_file(table: &RouteTable) -> String {
    let mut out = String::new();
    for rule in table.redirects.effective() {
        if rule.from.trim_matches('/').is_empty() {
            continue;
        }
        let to = if rule.to.is_empty() { "/" } else { &rule.to };
        out.push_str(&format!(
            "{} {} {}\n",
            encode_path(&rule.from),
            encode_path(to),
            rule.status()
        ));
    }
    out
}

/// Write the hosting redirect file. Returns the number of rules written.
pub fn write_redirects_file(table: &RouteTable, path: &Path) -> Result<usize> {
    let content = render_redirects_file(table);
    write_file(path, content.as_bytes())?;

    let count = content.lines().count();
    log!("redirect"; "{} ({} rules)", path.file_name().unwrap_or_default().to_string_lossy(), count);
    Ok(count)
}
