//! Unit tests for the workflow module.
//!
//! Tests are organised by concern: the capability table, the transition
//! engine, workload balancing, the revision loop, and bulk application.

mod balancer_tests;
mod capability_tests;
mod support;
