//! `windvane query`: derived fields or listings as JSON.

use std::fs;
use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use super::QueryArgs;
use super::common::{collect_and_derive, plan_routes};
use crate::config::SiteConfig;
use crate::derive::{DerivedFields, DerivedSet};
use crate::log;
use crate::page::listing;

/// One document as printed by `query`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentQueryResult<'a> {
    source: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(flatten)]
    fields: &'a DerivedFields,
}

fn collect_results<'a>(set: &'a DerivedSet, layout: Option<&str>) -> Vec<DocumentQueryResult<'a>> {
    set.iter()
        .filter(|(_, _, fields)| layout.is_none_or(|l| fields.layout == l))
        .map(|(_, doc, fields)| DocumentQueryResult {
            source: &doc.relative_path,
            title: doc.front.title.as_deref(),
            date: doc.front.date.as_deref(),
            fields,
        })
        .collect()
}

/// Render query output as JSON text.
fn render_query(args: &QueryArgs, config: &SiteConfig) -> Result<String> {
    let value = match (&args.layout, args.listing) {
        (Some(layout), true) => serde_json::to_value(listing(&plan_routes(config)?, layout))?,
        (layout, _) => {
            let set = collect_and_derive(config)?;
            serde_json::to_value(collect_results(&set, layout.as_deref()))?
        }
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(formatted)
}

pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let formatted = render_query(args, config)?;

    if let Some(ref output_path) = args.out {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::tests::site;
    use serde_json::{Value, json};

    fn args(layout: Option<&str>, listing: bool) -> QueryArgs {
        QueryArgs {
            layout: layout.map(str::to_string),
            listing,
            pretty: false,
            out: None,
        }
    }

    fn query(args: &QueryArgs, config: &SiteConfig) -> Value {
        serde_json::from_str(&render_query(args, config).unwrap()).unwrap()
    }

    #[test]
    fn test_query_prints_derived_fields() {
        let (_dir, config) = site(&[(
            "articles/2020-intro.mdx",
            "---\ntitle: Intro\ndate: 2020-01-02\nlayout: post\n---\n",
        )]);
        let value = query(&args(None, false), &config);

        assert_eq!(
            value,
            json!([{
                "source": "articles/2020-intro.mdx",
                "title": "Intro",
                "date": "2020-01-02",
                "slug": "/articles/2020-intro/",
                "layout": "post",
                "lang": "zh-Hans",
                "legacySlug": "/2020/01/02/articles/2020-intro/"
            }])
        );
    }

    #[test]
    fn test_query_filters_by_layout_without_template_check() {
        let (_dir, config) = site(&[
            ("posts/a.md", ""),
            ("journal/b.md", "---\nlayout: journal\n---\n"),
        ]);
        let value = query(&args(Some("journal"), false), &config);

        let sources: Vec<_> = value.as_array().unwrap().iter().map(|v| v["source"].clone()).collect();
        assert_eq!(sources, vec![json!("journal/b.md")]);
    }

    #[test]
    fn test_query_listing_newest_first() {
        let (_dir, config) = site(&[
            ("posts/old.md", "---\ndate: 2019-01-01\n---\n"),
            ("posts/new.md", "---\ndate: 2021-11-20\ntitle: New\n---\n"),
        ]);
        let value = query(&args(Some("post"), true), &config);

        assert_eq!(value[0]["slug"], "/posts/new/");
        assert_eq!(value[0]["title"], "New");
        assert_eq!(value[1]["slug"], "/posts/old/");
    }

    #[test]
    fn test_query_writes_file() {
        let (dir, config) = site(&[("a.md", "")]);
        let out = dir.path().join("query.json");
        let args = QueryArgs {
            out: Some(out.clone()),
            ..args(None, false)
        };
        run_query(&args, &config).unwrap();
        assert!(fs::read_to_string(out).unwrap().contains("\"slug\":\"/a/\""));
    }
}
