//! JSON encoding of [`TradeFinanceRecord`] as stored on the ledger.
//!
//! Field order follows the struct declaration, so the same record always
//! encodes to the same bytes.

use crate::domain::record::TradeFinanceRecord;
use crate::error::Result;

pub fn encode(record: &TradeFinanceRecord) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}

pub fn decode(bytes: &[u8]) -> Result<TradeFinanceRecord> {
    Ok(serde_json::from_slice(bytes)?)
}
