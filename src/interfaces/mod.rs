//! Batch interfaces used by the command-line host.

pub mod csv;
