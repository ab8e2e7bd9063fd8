//! Adapter implementations of the assignment registry port.

pub mod memory;
