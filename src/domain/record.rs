use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle position of a trade-finance record.
///
/// Serialized as the literal strings stored on the ledger, so records written
/// by other ledger clients decode unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Inspection")]
    Inspection,
    #[serde(rename = "B/L")]
    BillOfLading,
    #[serde(rename = "Present Documents")]
    DocumentsPresented,
    #[serde(rename = "Documents Arrival")]
    DocumentsArrived,
    #[serde(rename = "Payment")]
    Paid,
}

impl Status {
    /// Every status in lifecycle order.
    pub const ALL: [Status; 5] = [
        Status::Inspection,
        Status::BillOfLading,
        Status::DocumentsPresented,
        Status::DocumentsArrived,
        Status::Paid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Inspection => "Inspection",
            Status::BillOfLading => "B/L",
            Status::DocumentsPresented => "Present Documents",
            Status::DocumentsArrived => "Documents Arrival",
            Status::Paid => "Payment",
        }
    }

    /// The only status a record may advance to from `self`. `Paid` is terminal.
    pub fn next(&self) -> Option<Status> {
        match self {
            Status::Inspection => Some(Status::BillOfLading),
            Status::BillOfLading => Some(Status::DocumentsPresented),
            Status::DocumentsPresented => Some(Status::DocumentsArrived),
            Status::DocumentsArrived => Some(Status::Paid),
            Status::Paid => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trade-finance document record, keyed on the ledger by its `reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeFinanceRecord {
    pub reference: String,
    pub exporter: String,
    pub shipping_corporation: String,
    /// Set when documents are presented.
    pub negotiation_bank: String,
    /// Set when documents arrive.
    pub import_bank: String,
    pub status: Status,
}

impl TradeFinanceRecord {
    /// Builds the record produced by goods inspection, the first step of the
    /// lifecycle. Both bank fields start empty.
    pub fn inspected(
        reference: impl Into<String>,
        exporter: impl Into<String>,
        shipping_corporation: impl Into<String>,
    ) -> Self {
        Self {
            reference: reference.into(),
            exporter: exporter.into(),
            shipping_corporation: shipping_corporation.into(),
            negotiation_bank: String::new(),
            import_bank: String::new(),
            status: Status::Inspection,
        }
    }
}
