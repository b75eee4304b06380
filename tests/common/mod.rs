#![allow(dead_code)]

use async_trait::async_trait;
use trade_finance::application::dispatcher::{Dispatcher, Invocation, Outcome};
use trade_finance::application::engine::WorkflowEngine;
use trade_finance::domain::codec;
use trade_finance::domain::ports::RecordStore;
use trade_finance::domain::record::TradeFinanceRecord;
use trade_finance::error::{Result, TradeFinanceError};
use trade_finance::infrastructure::in_memory::InMemoryRecordStore;

pub fn dispatcher() -> Dispatcher {
    Dispatcher::new(WorkflowEngine::new(Box::new(InMemoryRecordStore::new())))
}

pub async fn invoke(dispatcher: &Dispatcher, args: &[&str]) -> Result<Outcome> {
    dispatcher
        .handle(&Invocation::invoke(args.iter().copied()))
        .await
}

pub async fn query_record(dispatcher: &Dispatcher, reference: &str) -> TradeFinanceRecord {
    let outcome = invoke(dispatcher, &["query", reference]).await.unwrap();
    codec::decode(&outcome.payload).unwrap()
}

/// Which store operation should fail.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Get,
    Put,
    Delete,
}

/// Wraps an in-memory store and fails the chosen operation with an I/O error.
pub struct FailingStore {
    pub inner: InMemoryRecordStore,
    pub fail_on: FailOn,
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if self.fail_on == FailOn::Get {
            return Err(TradeFinanceError::storage("simulated read failure"));
        }
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        if self.fail_on == FailOn::Put {
            return Err(TradeFinanceError::storage("simulated write failure"));
        }
        self.inner.put(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        if self.fail_on == FailOn::Delete {
            return Err(TradeFinanceError::storage("simulated delete failure"));
        }
        self.inner.delete(key).await
    }
}
