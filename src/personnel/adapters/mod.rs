//! Adapter implementations of the personnel directory port.

pub mod memory;
