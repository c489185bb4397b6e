//! # Resource Providers (`report::resource`)
//!
//! File: cli/src/report/resource.rs
//!
//! ## Overview
//!
//! A `ResourceProvider` turns a resource name (e.g. `templates/summary.xls`)
//! into a byte stream. Rendering-mode resolution is handed a provider instead of
//! reaching for a process-wide lookup, so the same code serves templates from a
//! directory on disk or from memory.
//!
//! - `DirectoryResourceProvider`: names are `/`-separated paths under a root
//!   directory. Absolute names and `..` components are rejected.
//! - `MemoryResourceProvider`: an in-memory name → bytes map.
//!
use crate::core::error::{ReportFsError, Result};
use anyhow::{anyhow, Context};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Source of named template resources.
pub trait ResourceProvider {
    /// Opens `name` for reading, or fails if it does not exist.
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>>;

    /// Every resource name this provider can open, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

fn not_found(name: &str) -> anyhow::Error {
    anyhow!(ReportFsError::Resource {
        name: name.to_string(),
        reason: "resource not found".to_string(),
    })
}

/// Serves resources from files below a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResourceProvider {
    root: PathBuf,
}

impl DirectoryResourceProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a resource name onto a path inside the root.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes {
            return Err(anyhow!(ReportFsError::Resource {
                name: name.to_string(),
                reason: "resource names must be relative and stay inside the resource directory"
                    .to_string(),
            }));
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceProvider for DirectoryResourceProvider {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(not_found(name));
        }
        debug!("Opening resource '{}' at {}", name, path.display());
        let file = File::open(&path)
            .with_context(|| format!("Failed to open resource file {}", path.display()))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.with_context(|| {
                format!("Failed to walk resource directory {}", self.root.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                let name: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                names.push(name.join("/"));
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Serves resources held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceProvider {
    resources: BTreeMap<String, Vec<u8>>,
}

impl MemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(name.into(), contents.into());
        self
    }
}

impl ResourceProvider for MemoryResourceProvider {
    fn open(&self, name: &str) -> Result<Box<dyn Read + '_>> {
        let bytes = self.resources.get(name).ok_or_else(|| not_found(name))?;
        Ok(Box::new(Cursor::new(bytes.as_slice())))
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.resources.keys().cloned().collect())
    }
}
