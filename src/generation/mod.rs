//! Generation domain module - renders the derived documents
//!
//! Turns discovered generators into the README section (via Tera templates)
//! and the collection manifest, and splices the section into an existing
//! README.

pub mod manifest;
pub mod markdown;
pub mod readme;
pub mod types;

pub use manifest::{build_collection, render_collection};
pub use markdown::MarkdownRenderer;
pub use readme::splice_readme;
pub use types::*;
