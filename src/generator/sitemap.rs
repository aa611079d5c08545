//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all output pages for search engine
//! indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/posts/my-note/</loc>
//!     <lastmod>2021-03-05</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{core::url::join_site_url, generator::minify_xml, log, page::RouteTable};
use anyhow::Result;
use std::path::Path;

use super::{escape_xml, write_file};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    /// One entry per output page, located under `base_url`.
    pub fn build(table: &RouteTable, base_url: &str) -> Self {
        let urls = table
            .pages
            .iter()
            .map(|page| UrlEntry {
                loc: page
                    .canonical_url
                    .clone()
                    .unwrap_or_else(|| join_site_url(base_url, &page.path)),
                lastmod: page.date.map(|d| d.to_iso()),
            })
            .collect();

        Self { urls }
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    pub fn write(self, path: &Path, minify: bool) -> Result<()> {
        let xml = self.into_xml();
        let xml = minify_xml(xml.as_bytes(), minify);
        write_file(path, &xml)?;

        log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentDocument, FrontMatter};
    use crate::derive::{DeriveDefaults, derive_all};
    use crate::page::{TemplateRegistry, materialize};

    fn table() -> RouteTable {
        let mut dated = FrontMatter::default();
        dated.set("date", serde_json::json!("2021-03-05T10:00:00+08:00"));
        let docs = vec![
            ContentDocument::new("about.md", FrontMatter::default()),
            ContentDocument::new("posts/my-note.md", dated),
        ];
        let set = derive_all(docs, &DeriveDefaults::default());
        materialize(Ok(&set), &TemplateRegistry::new(["post"])).unwrap()
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap { urls: vec![] }.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_from_route_table() {
        let sitemap = Sitemap::build(&table(), "https://raptazure.github.io/");
        let xml = sitemap.into_xml();
        assert_eq!(xml.matches("<url>").count(), 2);

        assert!(xml.contains("<loc>https://raptazure.github.io/about/</loc>"));
        assert!(xml.contains("<loc>https://raptazure.github.io/posts/my-note/</loc>"));
        assert!(xml.contains("<lastmod>2021-03-05</lastmod>"));
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_sitemap_prefers_canonical_url() {
        let table = table().with_site_url(Some("https://example.com"));
        let xml = Sitemap::build(&table, "https://ignored.example").into_xml();
        assert!(xml.contains("<loc>https://example.com/about/</loc>"));
        assert!(!xml.contains("ignored.example"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                lastmod: None,
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_write_minified() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.xml");
        Sitemap::build(&table(), "https://example.com").write(&path, true).unwrap();

        let xml = std::fs::read_to_string(&path).unwrap();
        assert!(!xml.contains('\n'));
        assert!(xml.ends_with("</urlset>"));
    }
}
