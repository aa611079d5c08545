//! Content discovery: the build's document listing.
//!
//! ```text
//! content/
//! ├── posts/my-note.md         -> ContentDocument { relative_path: "posts/my-note.md", .. }
//! ├── articles/2020-intro.mdx  -> ContentDocument { relative_path: "articles/2020-intro.mdx", .. }
//! └── images/cover.png         (ignored, not content)
//! ```
//!
//! A [`DocumentSource`] yields every document once per build. A failing
//! listing is a [`QueryError`] and aborts the build before any page exists.

mod document;
mod frontmatter;
mod source;

pub use document::{ContentDocument, DocId, FrontMatter};
pub use frontmatter::FrontMatterExtractor;
pub use source::{DocumentSource, FsSource, QueryError};
