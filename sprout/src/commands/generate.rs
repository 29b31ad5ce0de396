use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use sprout_codegen::{GenerateOptions, Pipeline, SourceTree, WriteOutcome};
use sprout_manifest::SproutToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml)
    #[arg(short, long, default_value = "sprout.toml")]
    pub config: PathBuf,

    /// Spring Boot project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub project: PathBuf,

    /// Preview the files that would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Rewrite files that already exist
    #[arg(long)]
    pub overwrite: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let sprout_toml = SproutToml::open(&self.config).unwrap_or_exit();
        let manifest = sprout_toml.manifest();
        let descriptor = manifest.descriptor();
        let flags = manifest.flags();

        let pipeline = Pipeline::standard();

        if self.dry_run {
            let rendered = pipeline.render(&descriptor, &flags);
            println!(
                "Would generate {} files for {}:",
                rendered.len(),
                descriptor.name()
            );
            for (_, artifact) in &rendered {
                println!("  {}", artifact.relative_path());
            }
            return Ok(());
        }

        let tree = SourceTree::open(&self.project)
            .wrap_err_with(|| format!("Cannot open project at {}", self.project.display()))?;

        let report = pipeline
            .run(&tree, &descriptor, &flags, GenerateOptions { overwrite: self.overwrite })
            .wrap_err("Generation failed")?;

        for outcome in &report.outcomes {
            let tag = match outcome.outcome {
                WriteOutcome::Created => "created",
                WriteOutcome::Skipped => "skipped",
                WriteOutcome::Merged => "merged ",
            };
            println!("  {tag}  {}", outcome.path);
        }

        println!();
        println!(
            "Generated {} for {}: {} created, {} skipped, {} merged",
            plural(report.outcomes.len(), "file"),
            descriptor.name(),
            report.created(),
            report.skipped(),
            report.merged()
        );
        if report.skipped() > 0 && !self.overwrite {
            println!("Existing files were left untouched; use --overwrite to regenerate them.");
        }

        Ok(())
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
