//! `windvane validate`: plan routes and report problems without writing.

use anyhow::{Result, bail};

use super::ValidateArgs;
use super::common::plan_routes;
use crate::config::SiteConfig;
use crate::page::{BuildError, RouteTable, TemplateRegistry, print_conflicts, warn_redirects};
use crate::{debug, log};
use crate::utils::{plural_count, plural_s};

/// Validate the site. Fails on build errors, and on redirect warnings with `--strict`.
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig) -> Result<()> {
    let table = match plan_routes(config) {
        Ok(table) => table,
        Err(BuildError::PathConflict(conflicts)) => {
            print_conflicts(&conflicts);
            bail!("validation failed: {}", plural_count(conflicts.len(), "path conflict"));
        }
        Err(err) => {
            log!("error"; "{err}");
            bail!("validation failed");
        }
    };

    report(&table, &config.template_registry());
    let warnings = warn_redirects(&table.redirects, &table.pages);
    if args.strict && warnings > 0 {
        bail!("validation failed: {} (strict)", plural_count(warnings, "redirect warning"));
    }

    log!("done"; "no errors");
    Ok(())
}

/// Summarize templates in use.
fn report(table: &RouteTable, registry: &TemplateRegistry) {
    let mut used: Vec<_> = table.pages.iter().map(|p| p.template.as_str()).collect();
    used.sort_unstable();
    used.dedup();

    log!("validate"; "{}, {}, template{}: {}",
        plural_count(table.pages.len(), "page"),
        plural_count(table.redirects.len(), "redirect"),
        plural_s(used.len()),
        used.join(", "));

    let unused: Vec<_> = registry.names().filter(|n| !used.contains(n)).collect();
    if !unused.is_empty() {
        debug!("validate"; "registered but unused: {}", unused.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::tests::site;

    #[test]
    fn test_validate_clean_site() {
        let (dir, config) = site(&[("posts/a.md", "---\ndate: 2021-03-05\n---\n")]);
        validate_site(&ValidateArgs { strict: true }, &config).unwrap();
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_validate_without_site_url() {
        let (_dir, mut config) = site(&[("posts/a.md", "---\ndate: 2021-03-05\n---\n")]);
        config.site.info.url = None;
        config.validate().unwrap();
        validate_site(&ValidateArgs { strict: false }, &config).unwrap();
    }

    #[test]
    fn test_validate_missing_template() {
        let (_dir, config) = site(&[("a.md", "---\nlayout: gallery\n---\n")]);
        assert!(validate_site(&ValidateArgs { strict: false }, &config).is_err());
    }

    #[test]
    fn test_strict_fails_on_redirect_collision() {
        let (_dir, config) = site(&[("a.md", ""), ("b.md", "")]);
        assert!(validate_site(&ValidateArgs { strict: false }, &config).is_ok());
        assert!(validate_site(&ValidateArgs { strict: true }, &config).is_err());
    }
}
