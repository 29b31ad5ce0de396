//! The generator registry.
//!
//! Every artifact generator is a plain function registered here with a
//! name, a bundle, and an enablement predicate over the feature flags.
//! The pipeline walks the registry in order; adding a generator means
//! adding one entry, not a new pipeline step.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::Artifact;
use crate::generators;

/// Functional grouping of generators, in execution order.
///
/// Support types come first so that entity-specific code can reference
/// them; narrative docs come last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Bundle {
    Exceptions,
    Crud,
    Audit,
    Security,
    Pagination,
    Docs,
}

impl Bundle {
    pub fn name(&self) -> &'static str {
        match self {
            Bundle::Exceptions => "exceptions",
            Bundle::Crud => "crud",
            Bundle::Audit => "audit",
            Bundle::Security => "security",
            Bundle::Pagination => "pagination",
            Bundle::Docs => "docs",
        }
    }
}

type EnabledFn = fn(&FeatureFlags) -> bool;
type GenerateFn = fn(&TypeDescriptor, &FeatureFlags) -> Vec<Artifact>;

/// One registered generator.
pub struct GeneratorEntry {
    pub name: &'static str,
    pub bundle: Bundle,
    enabled: EnabledFn,
    generate: GenerateFn,
}

impl GeneratorEntry {
    pub fn enabled(&self, flags: &FeatureFlags) -> bool {
        (self.enabled)(flags)
    }

    pub fn generate(&self, descriptor: &TypeDescriptor, flags: &FeatureFlags) -> Vec<Artifact> {
        (self.generate)(descriptor, flags)
    }
}

/// Ordered collection of generator entries.
pub struct Registry {
    entries: Vec<GeneratorEntry>,
}

fn always(_: &FeatureFlags) -> bool {
    true
}

fn when_auditing(flags: &FeatureFlags) -> bool {
    flags.auditing
}

fn when_security(flags: &FeatureFlags) -> bool {
    flags.security
}

fn when_pagination(flags: &FeatureFlags) -> bool {
    flags.pagination
}

fn when_docs(flags: &FeatureFlags) -> bool {
    flags.docs
}

impl Registry {
    /// The full standard catalog, in bundle order.
    pub fn standard() -> Self {
        let entries = vec![
            GeneratorEntry {
                name: "error-handling",
                bundle: Bundle::Exceptions,
                enabled: always,
                generate: generators::exceptions::generate,
            },
            GeneratorEntry {
                name: "dto",
                bundle: Bundle::Crud,
                enabled: always,
                generate: generators::dto::generate,
            },
            GeneratorEntry {
                name: "mapper",
                bundle: Bundle::Crud,
                enabled: always,
                generate: generators::mapper::generate,
            },
            GeneratorEntry {
                name: "repository",
                bundle: Bundle::Crud,
                enabled: always,
                generate: generators::repository::generate,
            },
            GeneratorEntry {
                name: "service",
                bundle: Bundle::Crud,
                enabled: always,
                generate: generators::service::generate,
            },
            GeneratorEntry {
                name: "controller",
                bundle: Bundle::Crud,
                enabled: always,
                generate: generators::controller::generate,
            },
            GeneratorEntry {
                name: "audit",
                bundle: Bundle::Audit,
                enabled: when_auditing,
                generate: generators::audit::generate,
            },
            GeneratorEntry {
                name: "security",
                bundle: Bundle::Security,
                enabled: when_security,
                generate: generators::security::generate,
            },
            GeneratorEntry {
                name: "pagination",
                bundle: Bundle::Pagination,
                enabled: when_pagination,
                generate: generators::pagination::generate,
            },
            GeneratorEntry {
                name: "docs",
                bundle: Bundle::Docs,
                enabled: when_docs,
                generate: generators::docs::generate,
            },
        ];
        Self { entries }
    }

    pub fn entries(&self) -> &[GeneratorEntry] {
        &self.entries
    }

    /// Entries enabled under the given flags, preserving order.
    pub fn enabled<'a>(
        &'a self,
        flags: &'a FeatureFlags,
    ) -> impl Iterator<Item = &'a GeneratorEntry> {
        self.entries.iter().filter(move |e| e.enabled(flags))
    }
}
