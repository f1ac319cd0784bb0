//! Turning a raw schema into a [`Generator`] record

use std::path::{Component, Path};

use crate::collection::types::{Generator, SchematicSchema};
use crate::core::error::{Error, Result};

impl Generator {
    /// Build a generator from its parsed schema.
    ///
    /// `source_root` is the directory local paths are computed against
    /// (usually `<project>/src`); `path` is the schema file itself.
    pub fn from_schema(source_root: &Path, path: &Path, schema: SchematicSchema) -> Result<Self> {
        let id = schema.id.or(schema.schema_id).ok_or_else(|| {
            Error::config(format!(
                "generator schema {} has no `id` or `$id`",
                path.display()
            ))
        })?;

        let title = schema
            .title
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| id.replace('-', " "));
        let name = schema
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| anchor_slug(&title));
        let local_path = local_path(source_root, path)?;

        Ok(Self {
            path: path.to_path_buf(),
            local_path,
            id,
            name,
            title,
            description: schema.description.unwrap_or_default(),
            examples: schema.examples,
            dependencies: schema.dependencies,
            dev_dependencies: schema.dev_dependencies,
            properties: schema.properties,
            required: schema.required,
            hidden: schema.hidden,
        })
    }

    /// Factory location written to the collection manifest
    pub fn factory_path(&self) -> String {
        let dir = match self.local_path.rfind('/') {
            Some(0) => "/",
            Some(idx) => &self.local_path[..idx],
            None => ".",
        };
        format!(".{dir}")
    }

    /// Schema location written to the collection manifest
    pub fn schema_path(&self) -> String {
        format!(".{}", self.local_path)
    }

    /// One-line summary for the README index
    pub fn summary(&self) -> &str {
        if self.description.is_empty() {
            &self.id
        } else {
            &self.description
        }
    }

    /// Whether `property` is listed in the schema's `required` array
    pub fn is_required(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }
}

/// Lower-cased title with spaces turned into dashes
pub fn anchor_slug(title: &str) -> String {
    title.replace(' ', "-").to_lowercase()
}

/// Path of `path` below `source_root`, `/`-separated with a leading `/`.
///
/// Schemas outside the source directory keep their full absolute path.
pub fn local_path(source_root: &Path, path: &Path) -> Result<String> {
    let absolute = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    let source = std::path::absolute(source_root).map_err(|e| Error::io(source_root, e))?;

    match absolute.strip_prefix(&source) {
        Ok(relative) => {
            let parts: Vec<String> = relative
                .components()
                .filter_map(|component| match component {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            Ok(format!("/{}", parts.join("/")))
        }
        Err(_) => Ok(absolute.to_string_lossy().replace('\\', "/")),
    }
}
