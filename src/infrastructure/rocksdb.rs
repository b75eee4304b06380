use crate::domain::ports::RecordStore;
use crate::error::{Result, TradeFinanceError};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding encoded trade-finance records.
pub const CF_RECORDS: &str = "records";

/// A persistent record store backed by RocksDB.
///
/// Records live in the `records` column family, keyed by the raw reference
/// bytes. `Clone` shares the underlying `Arc<DB>`.
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path, creating the
    /// `records` column family if it is missing.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_records = ColumnFamilyDescriptor::new(CF_RECORDS, Options::default());

        let db = DB::open_cf_descriptors(&opts, path, vec![cf_records])
            .map_err(TradeFinanceError::storage)?;

        Ok(Self { db: Arc::new(db) })
    }

    fn records_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_RECORDS)
            .ok_or_else(|| TradeFinanceError::storage("Records column family not found"))
    }
}

#[async_trait]
impl RecordStore for RocksDBStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let cf = self.records_cf()?;
        self.db
            .get_cf(cf, key.as_bytes())
            .map_err(TradeFinanceError::storage)
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let cf = self.records_cf()?;
        self.db
            .put_cf(cf, key.as_bytes(), value)
            .map_err(TradeFinanceError::storage)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let cf = self.records_cf()?;
        self.db
            .delete_cf(cf, key.as_bytes())
            .map_err(TradeFinanceError::storage)
    }
}
