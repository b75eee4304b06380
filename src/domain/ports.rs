use crate::error::Result;
use async_trait::async_trait;

/// Key-value ledger holding one encoded record per reference.
///
/// Implementations report I/O failures as storage errors; a missing key is
/// `Ok(None)` on read and a no-op on delete.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

pub type RecordStoreBox = Box<dyn RecordStore>;
