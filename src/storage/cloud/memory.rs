//! In-memory object backend for testing

use crate::storage::cloud::error::{CloudError, Result};
use crate::storage::cloud::traits::{page_from_sorted, ListPage, ObjectBackend, DEFAULT_PAGE_SIZE};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// In-memory object backend for testing
#[derive(Debug)]
pub struct InMemoryBackend {
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    page_size: usize,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl InMemoryBackend {
    /// Create a new in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that returns at most `page_size` keys per listing call
    pub fn with_page_size(page_size: usize) -> Self {
        Self { data: Arc::new(RwLock::new(BTreeMap::new())), page_size: page_size.max(1) }
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.data.read().map(|d| d.len()).unwrap_or(0)
    }

    /// Whether the backend holds no objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectBackend for InMemoryBackend {
    fn put(&self, key: &str, data: &[u8]) -> Result<()> {
        self.data
            .write()
            .map_err(|e| CloudError::Backend(e.to_string()))?
            .insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.data
            .read()
            .map_err(|e| CloudError::Backend(e.to_string()))?
            .get(key)
            .cloned()
            .ok_or_else(|| CloudError::NotFound(key.to_string()))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().map_err(|e| CloudError::Backend(e.to_string()))?.contains_key(key))
    }

    fn delete(&self, key: &str) -> Result<()> {
        let removed =
            self.data.write().map_err(|e| CloudError::Backend(e.to_string()))?.remove(key);
        if removed.is_none() {
            return Err(CloudError::NotFound(key.to_string()));
        }
        Ok(())
    }

    fn list_page(&self, prefix: &str, start_after: Option<&str>) -> Result<ListPage> {
        let data = self.data.read().map_err(|e| CloudError::Backend(e.to_string()))?;
        Ok(page_from_sorted(data.keys().map(String::as_str), prefix, start_after, self.page_size))
    }

    fn backend_type(&self) -> &'static str {
        "memory"
    }
}
