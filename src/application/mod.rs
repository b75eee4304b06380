//! Application layer orchestrating the trade-finance workflow.
//!
//! `WorkflowEngine` loads, validates and persists records; `Dispatcher` is the
//! entry point a transport calls with raw invocations.

pub mod dispatcher;
pub mod engine;
