//! Trade-finance document workflow over a key-value ledger.
//!
//! Records move strictly forward through inspection, bill of lading, document
//! presentation, document arrival and payment. See [`application::dispatcher`]
//! for the invocation entry point.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
