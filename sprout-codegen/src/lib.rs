//! Artifact generators and pipeline orchestration for the Sprout
//! scaffolding generator.
//!
//! # Module Organization
//!
//! - [`java`] - Java source building blocks (CodeBuilder, JavaFile, imports)
//! - [`generators`] - One pure generator per artifact bundle
//! - [`artifact`] - The generated-output unit and its write rules
//! - [`tree`] - Namespace resolution and existence checks over a source tree
//! - [`registry`] - Declarative table of generators and their gating flags
//! - [`pipeline`] - The orchestrator: render, then write, then report

pub mod artifact;
pub mod error;
pub mod generators;
pub mod java;
pub mod naming;
pub mod pipeline;
pub mod registry;
pub mod tree;

pub use artifact::{Artifact, Location, WriteMode, WriteOutcome};
pub use error::PipelineError;
pub use pipeline::{ArtifactOutcome, GenerateOptions, GenerateReport, Pipeline};
pub use registry::{Bundle, GeneratorEntry, Registry};
pub use tree::SourceTree;
