//! TOML manifest parsing and validation for the Sprout scaffolding generator.
//!
//! A `sprout.toml` declares the entity to scaffold and the optional bundles
//! to enable:
//!
//! ```toml
//! [entity]
//! name = "Product"
//! package = "com.example.shop.model"
//!
//! [[entity.fields]]
//! name = "id"
//! type = "Long"
//! id = true
//!
//! [[entity.fields]]
//! name = "title"
//! type = "String"
//!
//! [features]
//! pagination = true
//! docs = true
//! ```
//!
//! Parsing and validation happen before anything is written; a manifest
//! error aborts the whole invocation with a miette-rendered report.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use file::SproutToml;
pub use manifest::{EntitySpec, FeatureSpec, FieldSpec, Manifest};
