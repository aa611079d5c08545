//! Page materialization: route table and redirect table.
//!
//! ```text
//! DerivedSet ──► materialize ──► RouteTable
//!                  │               ├── pages:     [OutputPage]   (one per document)
//!                  │               └── redirects: RedirectTable  (one per document)
//!                  └── TemplateRegistry (closed set, unknown layout = error)
//! ```

mod conflict;
mod error;
mod listing;
mod materialize;
mod redirect;
mod route;
mod template;

pub use conflict::{print_conflicts, warn_redirects};
pub use error::BuildError;
pub use listing::{ListingEntry, listing, listings};
pub use materialize::materialize;
pub use redirect::{RedirectRule, RedirectTable};
pub use route::{OutputPage, PageContext, RouteTable};
pub use template::{TemplateId, TemplateRegistry};
