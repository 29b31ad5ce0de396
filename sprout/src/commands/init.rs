use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result, bail};

const STARTER: &str = r#"# Entity definition for sprout.
#
# Run `sprout generate` from the Spring Boot project root to produce the
# CRUD stack for this entity.

[entity]
name = "Product"
package = "com.example.demo.model"

[[entity.fields]]
name = "id"
type = "Long"
id = true

[[entity.fields]]
name = "name"
type = "String"

[[entity.fields]]
name = "price"
type = "BigDecimal"

[features]
security = false
auditing = false
pagination = false
docs = false
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write sprout.toml (defaults to ./sprout.toml)
    #[arg(short, long, default_value = "sprout.toml")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.output.exists() {
            bail!("{} already exists", self.output.display());
        }

        std::fs::write(&self.output, STARTER)
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        println!("Created {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("  1. Edit the entity name, package, and fields");
        println!("  2. Run `sprout generate` from your Spring Boot project root");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_manifest::Manifest;
    use std::str::FromStr;

    #[test]
    fn test_starter_manifest_parses() {
        let manifest = Manifest::from_str(STARTER).unwrap();
        let descriptor = manifest.descriptor();
        assert_eq!(descriptor.name(), "Product");
        assert_eq!(descriptor.id_type(), "Long");
    }
}
