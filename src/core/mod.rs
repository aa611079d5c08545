//! Core types - pure abstractions shared across the codebase.

mod category;
pub mod url;

pub use category::ContentKind;
