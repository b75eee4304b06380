//! Domain layer: the record, its codec, the state machine, and the store port.

pub mod codec;
pub mod ports;
pub mod record;
pub mod workflow;
