//! Generator collection domain
//!
//! Types describing generator schemas, the root package and the collection
//! manifest, plus the pure rules that turn one into the other.

pub mod dependencies;
pub mod generator;
pub mod types;

pub use dependencies::*;
pub use types::*;
