//! Application layer - orchestrates use cases and coordinates between domains

pub mod dto;
pub mod errors;
pub mod list_generators;
pub mod sync;
pub mod traits;
pub mod update_collection;
pub mod update_readme;

pub use dto::*;
pub use errors::*;
pub use list_generators::*;
pub use sync::*;
pub use traits::*;
pub use update_collection::*;
pub use update_readme::*;

use std::path::PathBuf;

/// Fail when a check run found files that need regenerating
pub fn ensure_up_to_date(changed: Vec<PathBuf>) -> Result<(), ApplicationError> {
    if changed.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::Outdated(changed))
    }
}
