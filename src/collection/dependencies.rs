//! Dependency version reconciliation.
//!
//! A generator schema may declare the packages its output needs. Versions can
//! be written three ways:
//!
//! - a concrete range such as `^16.0.0`, kept as-is;
//! - `*`, meaning "whatever the root `package.json` uses";
//! - a path to another `package.json`, relative to the schema, whose entry
//!   for the same package supplies the version.
//!
//! The functions here are pure; reading referenced manifests from disk is the
//! scanner's job.

use std::fmt;

use crate::collection::types::{DependencyMap, Generator, PackageManifest};

/// Version placeholder resolved against the root package
pub const WILDCARD: &str = "*";

/// Which dependency table of a generator is being reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    Runtime,
    Dev,
}

impl DependencyKind {
    pub const ALL: [DependencyKind; 2] = [DependencyKind::Runtime, DependencyKind::Dev];

    /// README heading for this table
    pub fn title(&self) -> &'static str {
        match self {
            DependencyKind::Runtime => "Dependencies",
            DependencyKind::Dev => "Dev dependencies",
        }
    }

    pub fn of<'a>(&self, generator: &'a Generator) -> &'a DependencyMap {
        match self {
            DependencyKind::Runtime => &generator.dependencies,
            DependencyKind::Dev => &generator.dev_dependencies,
        }
    }

    pub fn of_mut<'a>(&self, generator: &'a mut Generator) -> &'a mut DependencyMap {
        match self {
            DependencyKind::Runtime => &mut generator.dependencies,
            DependencyKind::Dev => &mut generator.dev_dependencies,
        }
    }

    /// Root package table consulted for `*` versions
    pub fn root_section<'a>(&self, package: &'a PackageManifest) -> Option<&'a DependencyMap> {
        match self {
            DependencyKind::Runtime => package.dependencies.as_ref(),
            DependencyKind::Dev => package.dev_dependencies.as_ref(),
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyKind::Runtime => write!(f, "dependencies"),
            DependencyKind::Dev => write!(f, "devDependencies"),
        }
    }
}

/// Replace every `*` version with the root package's version, when it has one
pub fn resolve_wildcards(deps: &mut DependencyMap, root_section: Option<&DependencyMap>) -> usize {
    let Some(root_section) = root_section else {
        return 0;
    };

    let mut resolved = 0;
    for (name, version) in deps.iter_mut() {
        if version != WILDCARD {
            continue;
        }
        if let Some(root_version) = root_section.get(name).filter(|v| !v.is_empty()) {
            *version = root_version.clone();
            resolved += 1;
        }
    }
    resolved
}

/// Version of `name` taken from a referenced `package.json`.
///
/// Both tables are consulted and the table opposite to `kind` wins when the
/// package appears in both. Empty versions are skipped.
pub fn referenced_version<'a>(
    name: &str,
    kind: DependencyKind,
    manifest: &'a PackageManifest,
) -> Option<&'a str> {
    let runtime = manifest.dependency(name).filter(|v| !v.is_empty());
    let dev = manifest.dev_dependency(name).filter(|v| !v.is_empty());
    match kind {
        DependencyKind::Runtime => dev.or(runtime),
        DependencyKind::Dev => runtime.or(dev),
    }
}
