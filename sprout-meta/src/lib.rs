//! Entity metadata model for the Sprout scaffolding generator.
//!
//! This crate provides the canonical, immutable description of one
//! data-holding type that the rest of the pipeline generates code for.
//!
//! # Architecture
//!
//! ```text
//! sprout.toml (TOML) → sprout-manifest (parsing) → sprout-meta (descriptor) → codegen
//! ```
//!
//! The descriptor types are designed to be:
//! - Read-only once constructed (consumed by every generator)
//! - Self-contained (no knowledge of manifests or the filesystem)
//! - Order-preserving (field declaration order drives generated output)

mod descriptor;
mod flags;

pub use descriptor::{FieldDescriptor, MetaError, TypeDescriptor};
pub use flags::FeatureFlags;
