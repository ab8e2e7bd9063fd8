//! Unit tests for the assignment module.
//!
//! Tests are organised by concern: domain construction and parsing, the
//! lifecycle state machine, and registry adapter behaviour including
//! optimistic versioning and query evaluation.
