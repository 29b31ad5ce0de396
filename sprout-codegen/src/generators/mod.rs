//! Artifact generators.
//!
//! Each module exposes one `generate` function with the shared signature
//! `(&TypeDescriptor, &FeatureFlags) -> Vec<Artifact>`. Generators are
//! pure: they render text and never look at the filesystem. The registry
//! wires them into bundles.

pub mod audit;
pub mod controller;
pub mod docs;
pub mod dto;
pub mod exceptions;
pub mod mapper;
pub mod pagination;
pub mod repository;
pub mod security;
pub mod service;
