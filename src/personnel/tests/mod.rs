//! Unit tests for the personnel module.
//!
//! Tests are organised by concern: domain invariants for workload and
//! capacity accounting, and directory adapter behaviour.
