//! Java source building blocks.
//!
//! Generators compose output from these pieces instead of filling
//! positional template slots: a [`JavaFile`] collects the package line and
//! imports, a [`CodeBuilder`] produces the indented type body.

mod builder;
mod file;
mod imports;

pub use builder::CodeBuilder;
pub use file::JavaFile;
pub use imports::ImportCollector;
