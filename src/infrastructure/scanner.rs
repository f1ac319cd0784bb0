//! Filesystem-based generator scanner
//!
//! Walks the project tree for generator schemas, parses them, and resolves
//! their dependency versions against the root `package.json` and any
//! manifests they reference.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::application::{ApplicationError, GeneratorScanner};
use crate::collection::{
    DependencyKind, Generator, PackageManifest, SchematicSchema, referenced_version,
    resolve_wildcards,
};
use crate::core::{Config, Error, Result};

/// Name of the package manifest at the project root
pub const PACKAGE_FILE_NAME: &str = "package.json";

/// Scanner that reads generators from the local filesystem
pub struct FileSystemGeneratorScanner;

impl FileSystemGeneratorScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemGeneratorScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GeneratorScanner for FileSystemGeneratorScanner {
    async fn load_package(&self, root: &Path) -> std::result::Result<PackageManifest, ApplicationError> {
        Ok(load_package_manifest(&root.join(PACKAGE_FILE_NAME)).await?)
    }

    async fn scan(
        &self,
        root: &Path,
        config: &Config,
        package: &PackageManifest,
    ) -> std::result::Result<Vec<Generator>, ApplicationError> {
        Ok(collect_generators(root, config, package).await?)
    }
}

/// Discover every visible generator below `root`
pub async fn collect_generators(
    root: &Path,
    config: &Config,
    package: &PackageManifest,
) -> Result<Vec<Generator>> {
    let schema_files = {
        let root = root.to_path_buf();
        let config = config.clone();
        tokio::task::spawn_blocking(move || discover_schema_files(&root, &config)).await??
    };
    debug!(count = schema_files.len(), root = %root.display(), "Found schema files");

    let source_root = config.source_path(root);
    let mut generators = Vec::with_capacity(schema_files.len());
    for path in schema_files {
        let schema: SchematicSchema = read_json(&path).await?;
        let mut generator = Generator::from_schema(&source_root, &path, schema)?;
        if generator.hidden {
            debug!(id = %generator.id, path = %path.display(), "Skipping hidden generator");
            continue;
        }
        reconcile_dependencies(&mut generator, package).await?;
        generators.push(generator);
    }

    info!(count = generators.len(), "Collected generators");
    Ok(generators)
}

/// Schema files below `root`, sorted by path, skipping excluded directories
pub fn discover_schema_files(root: &Path, config: &Config) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| config.is_excluded(name))
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry
                .file_name()
                .to_string_lossy()
                .ends_with(&config.schema_suffix)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Resolve `*` versions and manifest references for both dependency tables
pub async fn reconcile_dependencies(generator: &mut Generator, package: &PackageManifest) -> Result<()> {
    let schema_dir = generator
        .path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let id = generator.id.clone();

    for kind in DependencyKind::ALL {
        let deps = kind.of_mut(generator);
        let resolved = resolve_wildcards(deps, kind.root_section(package));
        if resolved > 0 {
            debug!(id = %id, kind = %kind, resolved, "Resolved wildcard versions from root package");
        }

        for (name, version) in deps.iter_mut() {
            let candidate = schema_dir.join(version.as_str());
            if !is_file(&candidate).await {
                continue;
            }
            let manifest = load_package_manifest(&candidate).await?;
            if let Some(found) = referenced_version(name, kind, &manifest) {
                debug!(
                    id = %id,
                    dependency = %name,
                    version = %found,
                    manifest = %candidate.display(),
                    "Resolved version from referenced manifest"
                );
                *version = found.to_string();
            }
        }
    }
    Ok(())
}

/// Parse a `package.json`
pub async fn load_package_manifest(path: &Path) -> Result<PackageManifest> {
    read_json(path).await
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| Error::json(path, e))
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}
