//! Wire types for the JSON documents schemadoc reads and writes

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `$schema` value written into every collection manifest
pub const COLLECTION_SCHEMA: &str =
    "./node_modules/@angular-devkit/schematics/collection-schema.json";

/// Package name to version (or version range, or manifest path), in declaration order
pub type DependencyMap = IndexMap<String, String>;

/// The subset of a `package.json` that schemadoc cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<DependencyMap>,
}

impl PackageManifest {
    /// Version of a runtime dependency, if declared
    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies
            .as_ref()
            .and_then(|deps| deps.get(name))
            .map(String::as_str)
    }

    /// Version of a development dependency, if declared
    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.dev_dependencies
            .as_ref()
            .and_then(|deps| deps.get(name))
            .map(String::as_str)
    }
}

/// JSON Schema `type` of a generator option; either one type or a union
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyType {
    Single(String),
    Union(Vec<String>),
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Single(kind) => write!(f, "{kind}"),
            PropertyType::Union(kinds) => write!(f, "{}", kinds.join(",")),
        }
    }
}

/// One option accepted by a generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyType>,
    /// Smart default, e.g. `{"$source": "argv", "index": 0}`
    #[serde(rename = "$default", default, skip_serializing_if = "Option::is_none")]
    pub smart_default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(rename = "x-prompt", default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<serde_json::Value>,
}

/// A generator's `*schema.json` as found on disk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchematicSchema {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "$id", default)]
    pub schema_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub dependencies: DependencyMap,
    #[serde(default)]
    pub dev_dependencies: DependencyMap,
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
}

/// Metadata extracted from one generator schema
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generator {
    /// Schema file the generator was read from
    pub path: PathBuf,
    /// Schema location relative to the source directory, `/`-separated with a leading `/`
    pub local_path: String,
    pub id: String,
    /// Anchor slug used in README links
    pub name: String,
    pub title: String,
    pub description: String,
    pub examples: Vec<String>,
    pub dependencies: DependencyMap,
    pub dev_dependencies: DependencyMap,
    pub properties: IndexMap<String, Property>,
    pub required: Vec<String>,
    pub hidden: bool,
}

/// One entry of the collection manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub description: String,
    pub factory: String,
    pub schema: String,
}

/// The `collection.json` manifest mapping generator ids to their files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub schematics: IndexMap<String, CollectionEntry>,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            schema: COLLECTION_SCHEMA.to_string(),
            schematics: IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_manifest_optional_sections() {
        let package: PackageManifest = serde_json::from_value(json!({
            "name": "@scope/generators",
            "version": "1.2.3",
            "devDependencies": { "typescript": "~5.4.0" }
        }))
        .unwrap();

        assert_eq!(package.name, "@scope/generators");
        assert!(package.dependencies.is_none());
        assert_eq!(package.dependency("typescript"), None);
        assert_eq!(package.dev_dependency("typescript"), Some("~5.4.0"));
    }

    #[test]
    fn test_schema_keeps_property_order() {
        let schema: SchematicSchema = serde_json::from_value(json!({
            "$schema": "http://json-schema.org/schema",
            "$id": "SchematicsComponent",
            "id": "component",
            "type": "object",
            "properties": {
                "zeta": { "type": "string" },
                "alpha": { "type": ["string", "boolean"], "default": false },
                "name": {
                    "type": "string",
                    "$default": { "$source": "argv", "index": 0 },
                    "x-prompt": "What name?"
                }
            },
            "required": ["name"]
        }))
        .unwrap();

        assert_eq!(schema.id.as_deref(), Some("component"));
        assert_eq!(schema.schema_id.as_deref(), Some("SchematicsComponent"));
        let keys: Vec<_> = schema.properties.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "name"]);
        assert_eq!(
            schema.properties["alpha"].kind.as_ref().map(|k| k.to_string()),
            Some("string,boolean".to_string())
        );
        assert!(schema.properties["name"].smart_default.is_some());
        assert!(!schema.hidden);
    }

    #[test]
    fn test_collection_serializes_schema_key() {
        let mut collection = Collection::default();
        collection.schematics.insert(
            "component".to_string(),
            CollectionEntry {
                description: "Create a component".to_string(),
                factory: "./component".to_string(),
                schema: "./component/schema.json".to_string(),
            },
        );

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["$schema"], COLLECTION_SCHEMA);
        assert_eq!(value["schematics"]["component"]["factory"], "./component");
    }
}
