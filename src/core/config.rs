//! Project configuration for schemadoc.
//!
//! Every setting has a default that matches the conventional layout of a
//! schematics package (`README.md`, `src/collection.json`, schemas named
//! `*schema.json`). A `schemadoc.toml` file at the project root may override
//! any of them, and CLI flags override the file.
//!
//! # Example
//!
//! ```rust
//! use schemadoc::core::config::Config;
//!
//! let config: Config = toml::from_str(r#"
//! readme = "docs/README.md"
//! exclude = ["node_modules", "dist"]
//! "#).unwrap();
//!
//! assert_eq!(config.readme.to_str(), Some("docs/README.md"));
//! assert_eq!(config.source_dir.to_str(), Some("src"));
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{Error, Result};

/// Marker that opens the generated README section
pub const START_GENERATORS: &str = "<!-- generators -->";
/// Marker that closes the generated README section
pub const STOP_GENERATORS: &str = "<!-- generatorsstop -->";
/// Name of the optional configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "schemadoc.toml";

/// Settings controlling discovery and output locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// README file, relative to the project root
    pub readme: PathBuf,
    /// Collection manifest output, relative to the project root
    pub collection: PathBuf,
    /// Directory that generator local paths are computed against
    pub source_dir: PathBuf,
    /// File-name suffix identifying generator schemas
    pub schema_suffix: String,
    /// Directory names skipped while walking the project
    pub exclude: Vec<String>,
    /// README section start marker
    pub start_marker: String,
    /// README section stop marker
    pub stop_marker: String,
    /// Command shown in usage and example snippets
    pub cli_command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            collection: PathBuf::from("src").join("collection.json"),
            source_dir: PathBuf::from("src"),
            schema_suffix: "schema.json".to_string(),
            exclude: vec!["node_modules".to_string(), ".git".to_string()],
            start_marker: START_GENERATORS.to_string(),
            stop_marker: STOP_GENERATORS.to_string(),
            cli_command: "schematics".to_string(),
        }
    }
}

impl Config {
    /// Load configuration for a project.
    ///
    /// When `explicit` is given the file must exist. Otherwise
    /// `<root>/schemadoc.toml` is used if present, falling back to defaults.
    pub async fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !tokio::fs::try_exists(&candidate)
                    .await
                    .map_err(|e| Error::io(&candidate, e))?
                {
                    debug!(root = %root.display(), "No configuration file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::io(&path, e))?;
        let config: Config =
            toml::from_str(&content).map_err(|source| Error::Toml {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "Loaded configuration");
        config.validate()?;
        Ok(config)
    }

    /// Check the settings that would otherwise produce a corrupt README or an empty scan
    pub fn validate(&self) -> Result<()> {
        if self.start_marker.trim().is_empty() || self.stop_marker.trim().is_empty() {
            return Err(Error::config("README markers cannot be empty"));
        }
        if self.start_marker == self.stop_marker {
            return Err(Error::config("start and stop markers must differ"));
        }
        if self.schema_suffix.is_empty() {
            return Err(Error::config("schema_suffix cannot be empty"));
        }
        if self.cli_command.trim().is_empty() {
            return Err(Error::config("cli_command cannot be empty"));
        }
        Ok(())
    }

    /// Absolute-or-root-relative README location
    pub fn readme_path(&self, root: &Path) -> PathBuf {
        root.join(&self.readme)
    }

    /// Absolute-or-root-relative collection manifest location
    pub fn collection_path(&self, root: &Path) -> PathBuf {
        root.join(&self.collection)
    }

    /// Directory generator local paths are relative to
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Whether a directory with this name is skipped during discovery
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|name| name == dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.readme, PathBuf::from("README.md"));
        assert_eq!(config.collection, PathBuf::from("src").join("collection.json"));
        assert_eq!(config.source_dir, PathBuf::from("src"));
        assert_eq!(config.schema_suffix, "schema.json");
        assert_eq!(config.start_marker, "<!-- generators -->");
        assert_eq!(config.stop_marker, "<!-- generatorsstop -->");
        assert_eq!(config.cli_command, "schematics");
        assert!(config.is_excluded("node_modules"));
        assert!(!config.is_excluded("src"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_markers() {
        let config = Config {
            stop_marker: START_GENERATORS.to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = Config {
            start_marker: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            schema_suffix: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_config_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(temp_dir.path(), None).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "cli_command = \"ng generate\"\nexclude = [\"dist\"]\n",
        )
        .unwrap();

        let config = Config::load(temp_dir.path(), None).await.unwrap();
        assert_eq!(config.cli_command, "ng generate");
        assert_eq!(config.exclude, vec!["dist".to_string()]);
        assert_eq!(config.readme, PathBuf::from("README.md"));
    }

    #[tokio::test]
    async fn test_config_load_rejects_unknown_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::fs::write(&path, "readme_file = \"README.md\"\n").unwrap();

        let result = Config::load(temp_dir.path(), Some(&path)).await;
        assert!(matches!(result, Err(Error::Toml { .. })));
    }

    #[tokio::test]
    async fn test_config_load_missing_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let result = Config::load(temp_dir.path(), Some(&path)).await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
