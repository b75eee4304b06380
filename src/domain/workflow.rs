//! The trade-finance state machine.
//!
//! Everything here is pure: a [`Transition`] takes the currently stored record
//! and either yields its replacement or refuses. Loading and persisting is the
//! engine's job.

use crate::domain::record::{Status, TradeFinanceRecord};
use crate::error::{Result, TradeFinanceError};

/// A lifecycle step applied to an existing record. Inspection is not listed
/// because it creates records rather than advancing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Ship,
    Present { negotiation_bank: String },
    Arrival { import_bank: String },
    Pay,
}

impl Transition {
    /// Action name used on the wire and in error messages.
    pub fn action(&self) -> &'static str {
        match self {
            Transition::Ship => "ship",
            Transition::Present { .. } => "present",
            Transition::Arrival { .. } => "arrival",
            Transition::Pay => "payment",
        }
    }

    pub fn required_status(&self) -> Status {
        match self {
            Transition::Ship => Status::Inspection,
            Transition::Present { .. } => Status::BillOfLading,
            Transition::Arrival { .. } => Status::DocumentsPresented,
            Transition::Pay => Status::DocumentsArrived,
        }
    }

    pub fn resulting_status(&self) -> Status {
        match self {
            Transition::Ship => Status::BillOfLading,
            Transition::Present { .. } => Status::DocumentsPresented,
            Transition::Arrival { .. } => Status::DocumentsArrived,
            Transition::Pay => Status::Paid,
        }
    }

    /// Produces the replacement for `current`.
    ///
    /// Fields the transition does not supply are carried over from `current`;
    /// the reference never changes.
    pub fn apply(&self, current: &TradeFinanceRecord) -> Result<TradeFinanceRecord> {
        if current.status != self.required_status() {
            return Err(TradeFinanceError::InvalidStateTransition {
                reference: current.reference.clone(),
                action: self.action(),
                expected: self.required_status(),
                actual: current.status,
            });
        }

        let mut next = current.clone();
        match self {
            Transition::Present { negotiation_bank } => {
                next.negotiation_bank = negotiation_bank.clone();
            }
            Transition::Arrival { import_bank } => {
                next.import_bank = import_bank.clone();
            }
            Transition::Ship | Transition::Pay => {}
        }
        next.status = self.resulting_status();
        Ok(next)
    }
}
