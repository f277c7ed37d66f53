//! Core domain types
//!
//! `record` holds the execution records exactly as the control plane lists them.
//! Everything else is derived from those records by the aggregator and is never
//! persisted.

pub mod identity;
pub mod record;
pub mod registry;
pub mod run;
