//! Local filesystem object backend

use crate::storage::cloud::error::{CloudError, Result};
use crate::storage::cloud::traits::{page_from_sorted, ListPage, ObjectBackend, DEFAULT_PAGE_SIZE};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Local filesystem object backend
///
/// Keys map to relative paths below `base_path`, one directory per `/`
/// separated segment.
#[derive(Debug)]
pub struct LocalBackend {
    base_path: PathBuf,
    page_size: usize,
}

impl LocalBackend {
    /// Create a new local backend
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path, page_size: DEFAULT_PAGE_SIZE }
    }

    /// Create a new local backend and ensure directory exists
    pub fn new_and_init(base_path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self::new(base_path))
    }

    /// Override the listing page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Root directory of this backend
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key
    fn key_to_path(&self, key: &str) -> Result<PathBuf> {
        let mut path = self.base_path.clone();
        for segment in key.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
                return Err(CloudError::Backend(format!(
                    "Key cannot be stored on the local filesystem: {key}"
                )));
            }
            path.push(segment);
        }
        Ok(path)
    }

    fn collect_keys(&self, dir: &Path, relative: &str, out: &mut Vec<String>) -> Result<()> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let entry = entry?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                tracing::debug!(path = %entry.path().display(), "skipping non UTF-8 path");
                continue;
            };
            let key = if relative.is_empty() { name } else { format!("{relative}/{name}") };
            if entry.file_type()?.is_dir() {
                self.collect_keys(&entry.path(), &key, out)?;
            } else {
                out.push(key);
            }
        }
        Ok(())
    }
}

impl ObjectBackend for LocalBackend {
    fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        let path = self.key_to_path(key)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::File::create(&path)?;
        file.write_all(data)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        let path = self.key_to_path(key)?;
        if !path.is_file() {
            return Err(CloudError::NotFound(key.to_string()));
        }
        Ok(std::fs::read(&path)?)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.key_to_path(key)?.is_file())
    }

    fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key)?;
        if !path.is_file() {
            return Err(CloudError::NotFound(key.to_string()));
        }
        std::fs::remove_file(&path)?;
        Ok(())
    }

    fn list_page(&self, prefix: &str, start_after: Option<&str>) -> Result<ListPage> {
        let mut keys = Vec::new();
        self.collect_keys(&self.base_path, "", &mut keys)?;
        keys.sort_unstable();
        Ok(page_from_sorted(keys.iter().map(String::as_str), prefix, start_after, self.page_size))
    }

    fn backend_type(&self) -> &'static str {
        "local"
    }
}
