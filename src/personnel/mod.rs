//! Personnel directory for inspection reviewers and monitoring personnel.
//!
//! Models the monitoring personnel roster: specialization tags gating which
//! assignments a person may receive, and workload counters bounded by a soft
//! capacity limit. Workload is mutated exclusively by the workflow's workload
//! balancer, never directly by a role view. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
