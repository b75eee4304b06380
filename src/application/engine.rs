use crate::domain::codec;
use crate::domain::ports::RecordStoreBox;
use crate::domain::record::TradeFinanceRecord;
use crate::domain::workflow::Transition;
use crate::error::{Result, TradeFinanceError};
use tracing::{debug, info, warn};

/// Runs trade-finance lifecycle operations against a record store.
///
/// Each call is a single load, validate, persist sequence. The engine takes no
/// locks; concurrent calls on the same reference must be serialized by the
/// store that backs it.
pub struct WorkflowEngine {
    store: RecordStoreBox,
}

impl WorkflowEngine {
    /// Creates a new `WorkflowEngine` over the given store.
    pub fn new(store: RecordStoreBox) -> Self {
        Self { store }
    }

    /// Records goods inspection, creating the record at `reference`.
    ///
    /// An existing record under the same reference is overwritten, whatever
    /// its status.
    pub async fn inspect(
        &self,
        reference: &str,
        exporter: &str,
        shipping_corporation: &str,
    ) -> Result<TradeFinanceRecord> {
        let record = TradeFinanceRecord::inspected(reference, exporter, shipping_corporation);
        let bytes = codec::encode(&record)?;
        self.store.put(reference, bytes).await?;

        info!(reference, status = %record.status, "inspection recorded");
        Ok(record)
    }

    /// Advances the record at `reference` through `transition` and returns the
    /// encoded replacement exactly as it was stored.
    pub async fn advance(&self, reference: &str, transition: &Transition) -> Result<Vec<u8>> {
        let current = self.load(reference).await?;

        let mut next = transition.apply(&current).inspect_err(|_| {
            warn!(
                reference,
                action = transition.action(),
                status = %current.status,
                "transition rejected"
            );
        })?;
        // The key is authoritative for the reference field.
        next.reference = reference.to_string();

        let bytes = codec::encode(&next)?;
        self.store.put(reference, bytes.clone()).await?;

        info!(
            reference,
            action = transition.action(),
            from = %current.status,
            to = %next.status,
            "transition committed"
        );
        Ok(bytes)
    }

    pub async fn ship(&self, reference: &str) -> Result<Vec<u8>> {
        self.advance(reference, &Transition::Ship).await
    }

    pub async fn present(&self, reference: &str, negotiation_bank: &str) -> Result<Vec<u8>> {
        let transition = Transition::Present {
            negotiation_bank: negotiation_bank.to_string(),
        };
        self.advance(reference, &transition).await
    }

    pub async fn arrival(&self, reference: &str, import_bank: &str) -> Result<Vec<u8>> {
        let transition = Transition::Arrival {
            import_bank: import_bank.to_string(),
        };
        self.advance(reference, &transition).await
    }

    pub async fn pay(&self, reference: &str) -> Result<Vec<u8>> {
        self.advance(reference, &Transition::Pay).await
    }

    /// Returns the stored bytes for `reference` untouched.
    pub async fn query(&self, reference: &str) -> Result<Vec<u8>> {
        debug!(reference, "getting state");
        self.store
            .get(reference)
            .await?
            .ok_or_else(|| TradeFinanceError::NotFound(reference.to_string()))
    }

    /// Removes the record at `reference`. Deleting a missing record succeeds.
    pub async fn delete(&self, reference: &str) -> Result<()> {
        self.store.delete(reference).await?;
        info!(reference, "record deleted");
        Ok(())
    }

    async fn load(&self, reference: &str) -> Result<TradeFinanceRecord> {
        let bytes = self.query(reference).await?;
        codec::decode(&bytes)
    }
}
