//! Utility functions for xst-cli
//!
//! Three independent helpers with no shared state: package version lookup,
//! version banner logging, and marker-filtered directory listing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Scaffold-injection marker. Directory listings skip any entry whose name
/// contains this substring so injected template machinery never reaches a
/// generated project.
pub const INJECT_FILES: &str = "inject-template";

/// Failures while reading the crate's own package metadata
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("package metadata not found at {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("package metadata at {path} is malformed: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

#[derive(Deserialize)]
struct Manifest {
    package: PackageMeta,
}

#[derive(Deserialize)]
struct PackageMeta {
    version: String,
}

/// Root of the crate's own installation, resolved relative to this module
/// rather than the caller's working directory.
pub fn root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Read the `version` field from the crate's own manifest
pub fn package_version() -> Result<String, MetadataError> {
    package_version_from(&root_path().join("Cargo.toml"))
}

/// Read the `version` field from a specific manifest file
pub fn package_version_from(manifest: &Path) -> Result<String, MetadataError> {
    let raw = fs::read_to_string(manifest).map_err(|source| MetadataError::NotFound {
        path: manifest.to_path_buf(),
        source,
    })?;
    let parsed: Manifest = toml::from_str(&raw).map_err(|e| MetadataError::Malformed {
        path: manifest.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(parsed.package.version)
}

/// Print the version banner to stdout, surrounded by blank lines
pub fn log_package_version() -> Result<(), MetadataError> {
    let msg = format!("{} version: {}", crate::PKG_NAME, package_version()?);
    println!();
    println!("{msg}");
    println!();
    Ok(())
}

/// List the entry names of `dir` in directory read order, excluding any
/// entry whose name contains [`INJECT_FILES`].
///
/// Best-effort contract: a missing or unreadable directory yields an empty
/// vec, indistinguishable from an empty directory. Callers that need the
/// underlying error use [`try_dir_file_names`].
pub fn dir_file_names<P: AsRef<Path>>(dir: P) -> Vec<String> {
    try_dir_file_names(dir).unwrap_or_default()
}

/// Strict variant of [`dir_file_names`]: surfaces the io error instead of
/// downgrading it to an empty listing.
pub fn try_dir_file_names<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.contains(INJECT_FILES) {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn version_round_trip() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Cargo.toml");
        fs::write(&manifest, "[package]\nname = \"demo\"\nversion = \"1.2.3\"\n").unwrap();

        assert_eq!(package_version_from(&manifest).unwrap(), "1.2.3");
    }

    #[test]
    fn version_missing_manifest_is_not_found() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Cargo.toml");

        match package_version_from(&manifest) {
            Err(MetadataError::NotFound { path, .. }) => assert_eq!(path, manifest),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn version_garbage_manifest_is_malformed() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Cargo.toml");
        fs::write(&manifest, "not toml at all [[[").unwrap();

        assert!(matches!(
            package_version_from(&manifest),
            Err(MetadataError::Malformed { .. })
        ));
    }

    #[test]
    fn version_without_field_is_malformed() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("Cargo.toml");
        fs::write(&manifest, "[package]\nname = \"demo\"\n").unwrap();

        assert!(matches!(
            package_version_from(&manifest),
            Err(MetadataError::Malformed { .. })
        ));
    }

    #[test]
    fn own_manifest_version_matches_build() {
        assert_eq!(package_version().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn listing_skips_inject_marker_entries() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("inject-template.xst"), "x").unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();

        let mut names = dir_file_names(temp.path());
        names.sort();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn listing_skips_marker_as_substring() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pre-inject-template-post"), "x").unwrap();
        fs::write(temp.path().join("keep.txt"), "k").unwrap();

        assert_eq!(dir_file_names(temp.path()), vec!["keep.txt"]);
    }

    #[test]
    fn listing_missing_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("does-not-exist");

        assert!(dir_file_names(&gone).is_empty());
    }

    #[test]
    fn strict_listing_surfaces_missing_dir() {
        let temp = TempDir::new().unwrap();
        let gone = temp.path().join("does-not-exist");

        assert!(try_dir_file_names(&gone).is_err());
    }
}
