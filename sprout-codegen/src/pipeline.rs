//! Pipeline orchestration.
//!
//! A run has two phases: render every enabled generator into in-memory
//! [`Artifact`]s, then write them through the [`SourceTree`]. Rendering is
//! pure, so a failed write never leaves half-rendered state behind and a
//! dry run is just the first phase.

use sprout_meta::{FeatureFlags, TypeDescriptor};

use crate::artifact::{Artifact, WriteOutcome};
use crate::error::PipelineError;
use crate::registry::Registry;
use crate::tree::SourceTree;

/// Options for one pipeline run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Rewrite skip-if-exists artifacts even when their file is present.
    pub overwrite: bool,
}

/// What happened to a single artifact.
#[derive(Debug, Clone)]
pub struct ArtifactOutcome {
    pub generator: &'static str,
    pub path: String,
    pub outcome: WriteOutcome,
}

/// Full account of one run, in generation order.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub outcomes: Vec<ArtifactOutcome>,
}

impl GenerateReport {
    pub fn created(&self) -> usize {
        self.count(WriteOutcome::Created)
    }

    pub fn skipped(&self) -> usize {
        self.count(WriteOutcome::Skipped)
    }

    pub fn merged(&self) -> usize {
        self.count(WriteOutcome::Merged)
    }

    fn count(&self, outcome: WriteOutcome) -> usize {
        self.outcomes.iter().filter(|o| o.outcome == outcome).count()
    }
}

/// Drives the registry over one entity descriptor.
pub struct Pipeline {
    registry: Registry,
}

impl Pipeline {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Pipeline over the standard generator catalog.
    pub fn standard() -> Self {
        Self::new(Registry::standard())
    }

    /// Render all enabled generators without touching the filesystem.
    ///
    /// Artifacts come back in bundle order, tagged with the generator that
    /// produced them.
    pub fn render(
        &self,
        descriptor: &TypeDescriptor,
        flags: &FeatureFlags,
    ) -> Vec<(&'static str, Artifact)> {
        let mut rendered = Vec::new();
        for entry in self.registry.enabled(flags) {
            for artifact in entry.generate(descriptor, flags) {
                rendered.push((entry.name, artifact));
            }
        }
        rendered
    }

    /// Render and write everything, returning the per-artifact outcomes.
    ///
    /// Existing files are skipped, not errors, so re-running over the same
    /// project is safe. Target packages are created on demand.
    pub fn run(
        &self,
        tree: &SourceTree,
        descriptor: &TypeDescriptor,
        flags: &FeatureFlags,
        options: GenerateOptions,
    ) -> Result<GenerateReport, PipelineError> {
        let rendered = self.render(descriptor, flags);

        let mut report = GenerateReport::default();
        for (generator, artifact) in rendered {
            let outcome = tree.write(&artifact, options.overwrite)?;
            report.outcomes.push(ArtifactOutcome {
                generator,
                path: artifact.relative_path(),
                outcome,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_meta::FieldDescriptor;

    fn product() -> TypeDescriptor {
        TypeDescriptor::new(
            "Product",
            "com.example.shop.model",
            "Long",
            vec![
                FieldDescriptor::new("id", "Long").unwrap(),
                FieldDescriptor::new("name", "String").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_render_is_pure_and_repeatable() {
        let pipeline = Pipeline::standard();
        let flags = FeatureFlags::default();

        let first = pipeline.render(&product(), &flags);
        let second = pipeline.render(&product(), &flags);
        assert_eq!(first.len(), second.len());
        for ((name_a, a), (name_b, b)) in first.iter().zip(second.iter()) {
            assert_eq!(name_a, name_b);
            assert_eq!(a.relative_path(), b.relative_path());
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn test_flags_change_the_rendered_set() {
        let pipeline = Pipeline::standard();

        let minimal = pipeline.render(&product(), &FeatureFlags::default());
        let full = pipeline.render(&product(), &FeatureFlags::all());
        assert!(full.len() > minimal.len());
    }
}
