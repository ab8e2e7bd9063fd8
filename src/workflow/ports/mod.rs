//! Ports exposed by the workflow context.

mod audit;

pub use audit::{AuditSink, AuditSinkError, AuditSinkResult};
