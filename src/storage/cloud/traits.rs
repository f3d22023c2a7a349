//! Object backend trait and listing types

use crate::storage::cloud::error::Result;

/// Default number of keys returned per listing page.
///
/// Matches the S3 `max-keys` default so local backends exercise the same
/// multi-page paths a real bucket does.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// One page of a prefix listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPage {
    /// Keys on this page, ascending
    pub keys: Vec<String>,
    /// Key to resume after, or `None` once the listing is exhausted
    pub next_start_after: Option<String>,
}

impl ListPage {
    /// Build a page from an ordered key run, flagging whether more may follow
    pub fn from_keys(keys: Vec<String>, truncated: bool) -> Self {
        let next_start_after = if truncated { keys.last().cloned() } else { None };
        Self { keys, next_start_after }
    }

    /// Whether another page should be requested
    pub fn is_truncated(&self) -> bool {
        self.next_start_after.is_some()
    }
}

/// Trait for flat key/value object storage backends
///
/// Every call is blocking and independent; backends hold no cross-call
/// transaction state.
pub trait ObjectBackend: Send + Sync {
    /// Store an object, replacing any previous value under the key
    fn put(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Retrieve an object
    fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Check if an object exists
    fn exists(&self, key: &str) -> Result<bool>;

    /// Delete an object
    fn delete(&self, key: &str) -> Result<()>;

    /// List one page of keys under `prefix`, strictly after `start_after`
    fn list_page(&self, prefix: &str, start_after: Option<&str>) -> Result<ListPage>;

    /// Get backend type name
    fn backend_type(&self) -> &'static str;
}

/// Select one page from an ascending key sequence.
///
/// Shared by the backends that hold their key set locally.
pub(crate) fn page_from_sorted<'a, I>(
    sorted_keys: I,
    prefix: &str,
    start_after: Option<&str>,
    page_size: usize,
) -> ListPage
where
    I: IntoIterator<Item = &'a str>,
{
    let page_size = page_size.max(1);
    let mut keys = Vec::with_capacity(page_size.min(64));
    let mut truncated = false;

    for key in sorted_keys {
        if !key.starts_with(prefix) {
            continue;
        }
        if start_after.is_some_and(|after| key <= after) {
            continue;
        }
        if keys.len() == page_size {
            truncated = true;
            break;
        }
        keys.push(key.to_string());
    }

    ListPage::from_keys(keys, truncated)
}
