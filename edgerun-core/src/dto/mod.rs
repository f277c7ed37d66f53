//! Data Transfer Objects
//!
//! Owned, serializable shapes for what crosses a process boundary: the list
//! envelope returned by the control plane, and snapshots of the derived views
//! for JSON output.

pub mod record;
pub mod registry;
