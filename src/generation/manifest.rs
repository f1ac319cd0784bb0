//! Building and serializing the collection manifest

use tracing::warn;

use crate::collection::{Collection, CollectionEntry, Generator};
use crate::core::error::Result;

/// Collection keyed by generator id, in discovery order
pub fn build_collection(generators: &[Generator]) -> Collection {
    let mut collection = Collection::default();
    for generator in generators {
        let entry = CollectionEntry {
            description: generator.description.clone(),
            factory: generator.factory_path(),
            schema: generator.schema_path(),
        };
        if let Some(previous) = collection.schematics.insert(generator.id.clone(), entry) {
            warn!(
                id = %generator.id,
                replaced = %previous.schema,
                path = %generator.path.display(),
                "Duplicate generator id, keeping the last one"
            );
        }
    }
    collection
}

/// Pretty JSON with two-space indentation and a trailing newline
pub fn render_collection(collection: &Collection) -> Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(collection)?))
}
