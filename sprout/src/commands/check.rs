use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprout_manifest::SproutToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sprout.toml (defaults to ./sprout.toml)
    #[arg(short, long, default_value = "sprout.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let sprout_toml = SproutToml::open(&self.config).unwrap_or_exit();
        let manifest = sprout_toml.manifest();
        let descriptor = manifest.descriptor();
        let flags = manifest.flags();

        println!("✓ {} is valid\n", self.config.display());
        println!("  {} ({})", descriptor.name(), descriptor.namespace());
        println!("  id type: {}", descriptor.id_type());

        let field_count = descriptor.fields().len();
        println!(
            "  {} field{}:",
            field_count,
            if field_count == 1 { "" } else { "s" }
        );
        for field in descriptor.fields() {
            let marker = if field.is_id() { " (id)" } else { "" };
            println!("    {} ({}){}", field.name(), field.ty(), marker);
        }

        let mut enabled: Vec<&str> = Vec::new();
        if flags.security {
            enabled.push("security");
        }
        if flags.auditing {
            enabled.push("auditing");
        }
        if flags.pagination {
            enabled.push("pagination");
        }
        if flags.docs {
            enabled.push("docs");
        }
        if enabled.is_empty() {
            println!("\n  optional bundles: none");
        } else {
            println!("\n  optional bundles: {}", enabled.join(", "));
        }

        Ok(())
    }
}
