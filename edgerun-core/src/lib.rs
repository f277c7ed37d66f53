//! Edgerun Core
//!
//! Run aggregation and provenance engine for edge model pipelines.
//!
//! This crate contains:
//! - Domain types: execution records as delivered by the control plane, and the
//!   model → version → run views derived from them
//! - Aggregation: folding a flat record list into a `ModelRegistry`
//! - Provenance: deciding whether a run's artifact was superseded by a newer build
//! - DTOs: owned, serializable snapshots of the derived views

pub mod aggregate;
pub mod constants;
pub mod domain;
pub mod dto;
pub mod extract;
pub mod provenance;

pub use aggregate::aggregate;
pub use provenance::is_overridden;
